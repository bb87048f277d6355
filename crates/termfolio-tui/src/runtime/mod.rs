//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Structure:
//! - `mod.rs`: event loop (polling, batching, rendering)
//! - `executor.rs`: effect dispatch onto timers and capabilities
//! - `timers.rs`: reveal, boot and one-shot timers
//! - `inbox.rs`: channel capabilities use to report back

mod executor;
mod inbox;
pub mod timers;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
pub use executor::EffectExecutor;
pub use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use termfolio_core::config::Config;
use termfolio_core::portfolio::Portfolio;
use tokio::sync::mpsc;

use crate::capabilities::Capabilities;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Render cadence (~30fps). Cursor blink is counted in these ticks.
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    executor: EffectExecutor,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a runtime with the system capabilities.
    pub fn new(config: &Config, portfolio: Portfolio) -> Result<Self> {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let caps = Capabilities::system(config, inbox_tx.clone());
        Self::with_capabilities(config, portfolio, caps, inbox_tx, inbox_rx)
    }

    /// Creates a runtime with the given capabilities. `inbox_tx` must feed
    /// `inbox_rx`.
    pub fn with_capabilities(
        config: &Config,
        portfolio: Portfolio,
        caps: Capabilities,
        inbox_tx: UiEventSender,
        inbox_rx: UiEventReceiver,
    ) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config, portfolio),
            executor: EffectExecutor::new(caps, inbox_tx, config.resume.clone()),
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let effects = update::start(&mut self.state);
        self.execute_effects(effects);

        let mut dirty = true;
        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so layout is current for the other events.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                // Only Tick triggers render; this caps frame rate at tick cadence
                let marks_dirty = matches!(&event, UiEvent::Tick);
                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the inbox, due timers and the terminal.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }
        events.extend(self.executor.timers.collect_due(Instant::now()));

        // Sleep in poll until the next tick or timer deadline, whichever is
        // first; don't wait at all if there is already work.
        let now = Instant::now();
        let next_tick = self.last_tick + FRAME_DURATION;
        let wake_at = self
            .executor
            .timers
            .next_deadline()
            .map_or(next_tick, |deadline| deadline.min(next_tick));
        let poll_duration = if events.is_empty() {
            wake_at.saturating_duration_since(now)
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        events.extend(self.executor.timers.collect_due(Instant::now()));

        if self.last_tick.elapsed() >= FRAME_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        let now = Instant::now();
        for effect in effects {
            if effect == UiEffect::Quit {
                self.state.tui.should_quit = true;
                continue;
            }
            self.executor.execute(effect, now);
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
