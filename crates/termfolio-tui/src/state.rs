//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── phase: Phase            (boot banner, then shell)
//! │   ├── lines: LineQueue        (rendered + pending output)
//! │   ├── input: InputState       (prompt buffer, history, suggestion)
//! │   ├── contact: ContactFormState
//! │   └── scroll: ScrollState
//! ├── portfolio: Portfolio        (read-only command data)
//! └── settings: Settings          (timings resolved from config)
//! ```

use std::time::Duration;

use termfolio_core::config::Config;
use termfolio_core::portfolio::Portfolio;
use termfolio_core::theme::Theme;

use crate::boot::BootState;
use crate::contact::ContactFormState;
use crate::input::InputState;
use crate::transcript::ScrollState;
use crate::typewriter::{LineQueue, RevealSchedule};

/// Ticks per cursor blink half-period.
pub const CURSOR_BLINK_TICKS: u64 = 15;

/// How long the "COPIED TO CLIPBOARD" notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_millis(1500);

/// How long the form shows "OPENING EMAIL CLIENT..." before resetting.
pub const CONTACT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Top-level session phase. `Shell` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Boot,
    Shell,
}

/// Which editor receives key input in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    Contact,
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: &'static str,
}

/// Timings and options resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub char_interval: Duration,
    pub boot_interval: Duration,
    pub prompt_delay: Duration,
    pub skip_boot: bool,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            char_interval: config.typewriter.char_interval(),
            boot_interval: config.typewriter.boot_interval(),
            prompt_delay: config.typewriter.prompt_delay(),
            skip_boot: config.skip_boot,
        }
    }
}

/// Mutable UI state.
pub struct TuiState {
    pub should_quit: bool,
    pub phase: Phase,
    pub boot: BootState,
    /// Output lines and the typewriter that reveals them.
    pub lines: LineQueue,
    /// Reveal timer currently requested from the runtime.
    pub reveal_timer: Option<RevealSchedule>,
    pub input: InputState,
    pub contact: ContactFormState,
    pub focus: Focus,
    pub theme: Theme,
    pub notice: Option<Notice>,
    notice_seq: u64,
    pub scroll: ScrollState,
    /// Terminal size from the last frame.
    pub terminal_size: (u16, u16),
    /// Render ticks since start (drives cursor blink).
    pub tick_count: u64,
}

impl TuiState {
    pub fn new(theme: Theme, char_interval: Duration) -> Self {
        Self {
            should_quit: false,
            phase: Phase::Boot,
            boot: BootState::default(),
            lines: LineQueue::new(char_interval),
            reveal_timer: None,
            input: InputState::default(),
            contact: ContactFormState::default(),
            focus: Focus::Prompt,
            theme,
            notice: None,
            notice_seq: 0,
            scroll: ScrollState::default(),
            terminal_size: (0, 0),
            tick_count: 0,
        }
    }

    pub fn cursor_visible(&self) -> bool {
        (self.tick_count / CURSOR_BLINK_TICKS).is_multiple_of(2)
    }

    /// Shows a notice, returning its id for the expiry timer.
    pub fn show_notice(&mut self, text: &'static str) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            id: self.notice_seq,
            text,
        });
        self.notice_seq
    }

    /// Hides the notice only if it is still the one the timer was armed for.
    pub fn expire_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub portfolio: Portfolio,
    pub settings: Settings,
}

impl AppState {
    pub fn new(config: &Config, portfolio: Portfolio) -> Self {
        let settings = Settings::from_config(config);
        Self {
            tui: TuiState::new(config.theme, settings.char_interval),
            portfolio,
            settings,
        }
    }
}
