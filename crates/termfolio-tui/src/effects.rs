//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent timers and I/O only (no direct UI mutations), which keeps
//! the reducer pure: it only mutates state and returns effects.

use std::time::Duration;

use termfolio_core::theme::Theme;

use crate::typewriter::{Cue, RevealSchedule};

/// One-shot timers the reducer can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShot {
    /// Shows the boot continue prompt.
    BootPrompt,
    /// Clears the contact form after sending, if it is still that send.
    ContactReset { generation: u64 },
    /// Hides the notice with this id.
    NoticeExpiry { id: u64 },
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Start (or replace) the periodic reveal timer.
    ScheduleReveal(RevealSchedule),

    /// Stop the reveal timer.
    CancelReveal,

    /// Start the periodic boot banner timer.
    StartBootTimer { interval: Duration },

    /// Stop the boot banner timer.
    StopBootTimer,

    /// Arm a one-shot timer.
    ScheduleOnce { delay: Duration, timer: OneShot },

    /// Play a sound cue.
    PlayCue(Cue),

    /// Copy text to the clipboard.
    CopyToClipboard { text: String },

    /// Open a URL (web page or `mailto:`) with the system handler.
    OpenUrl { url: String },

    /// Open the configured resume document.
    OpenResume,

    /// Announce a theme change.
    BroadcastTheme(Theme),
}
