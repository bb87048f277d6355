//! Side-effect capabilities injected into the runtime.
//!
//! The reducer never touches the outside world. The runtime executes its
//! effects through these traits, so tests can swap in recording fakes.

mod audio;
mod clipboard;
mod notifier;
mod opener;

use std::sync::Arc;

pub use audio::{AudioError, CUE_DEBOUNCE, CpalAudio, Debounced, NullAudio};
pub use clipboard::{ClipboardError, SystemClipboard};
pub use notifier::InboxNotifier;
pub use opener::{OpenError, SystemOpener};
use termfolio_core::config::Config;
use termfolio_core::theme::Theme;

use crate::runtime::UiEventSender;
use crate::typewriter::Cue;

/// Plays short sound cues.
pub trait AudioCue {
    fn play(&mut self, cue: Cue);
}

/// Writes text to the user's clipboard.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Hands a URL or path to the system handler.
///
/// Called from a blocking worker thread.
pub trait Opener: Send + Sync {
    fn open(&self, target: &str) -> Result<(), OpenError>;
}

/// Announces theme changes to the presentation.
pub trait Notifier {
    fn theme_changed(&self, theme: Theme);
}

/// The full set of capabilities the runtime executes effects with.
pub struct Capabilities {
    pub audio: Box<dyn AudioCue>,
    pub clipboard: Box<dyn Clipboard>,
    pub opener: Arc<dyn Opener>,
    pub notifier: Box<dyn Notifier>,
}

impl Capabilities {
    /// Real implementations: cpal audio (unless muted), OSC 52 / arboard
    /// clipboard, the `open` crate, and a notifier feeding the inbox.
    pub fn system(config: &Config, inbox: UiEventSender) -> Self {
        let audio: Box<dyn AudioCue> = if config.sound {
            Box::new(Debounced::new(CpalAudio::spawn(), config.audio.debounce()))
        } else {
            Box::new(NullAudio)
        };
        Self {
            audio,
            clipboard: Box::new(SystemClipboard),
            opener: Arc::new(SystemOpener),
            notifier: Box::new(InboxNotifier::new(inbox)),
        }
    }
}
