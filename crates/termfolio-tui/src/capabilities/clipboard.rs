//! Clipboard access with two transports:
//! 1. OSC 52 terminal escape sequence (works over SSH)
//! 2. System clipboard via `arboard`
//!
//! Runs on the runtime thread: OSC 52 writes to the same stdout the
//! renderer draws to, so it must not interleave with a frame.

use std::io::Write;

use base64::Engine;
use thiserror::Error;

use super::Clipboard;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("OSC 52 clipboard failed: {0}")]
    Osc52(String),
    #[error("System clipboard failed: {0}")]
    System(String),
}

/// Real clipboard: OSC 52 first, then the system clipboard.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        match copy_osc52(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::debug!(%err, "falling back to system clipboard");
                copy_system(text)
            }
        }
    }
}

/// OSC 52 sequence for `text`: `ESC ] 52 ; c ; <base64> ESC \`.
fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x1b\\")
}

fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(osc52_sequence(text).as_bytes())
        .map_err(|e| ClipboardError::Osc52(e.to_string()))?;
    stdout
        .flush()
        .map_err(|e| ClipboardError::Osc52(e.to_string()))
}

fn copy_system(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::System(e.to_string()))
}
