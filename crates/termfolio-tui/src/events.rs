//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! frame and timer ticks from the runtime, and results sent back through
//! the runtime inbox by capabilities.

use crossterm::event::Event;
use termfolio_core::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Render cadence tick (drives cursor blink).
    Tick,

    /// Current terminal size, sent before the other events of a frame.
    Frame { width: u16, height: u16 },

    /// Raw terminal input.
    Terminal(Event),

    /// Reveal timer fired for the queue epoch it was scheduled under.
    RevealTick { epoch: u64 },

    /// Boot banner timer fired.
    BootTick,

    /// Boot prompt delay elapsed.
    BootPromptDue,

    /// Contact form reset delay elapsed for the send of this generation.
    ContactResetDue { generation: u64 },

    /// Notice lifetime elapsed.
    NoticeExpired { id: u64 },

    /// Theme broadcast delivered.
    ThemeChanged(Theme),

    /// Text reached the clipboard.
    ClipboardCopied,
}
