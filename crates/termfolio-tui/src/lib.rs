//! Full-screen terminal UI for termfolio.
//!
//! Elm-style: `update` mutates `AppState` and returns `UiEffect`s, `render`
//! draws a snapshot, and `runtime` owns the terminal, timers and
//! capabilities that execute the effects.

pub mod capabilities;
pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{boot, contact, header, input, transcript, typewriter};
pub use runtime::TuiRuntime;
use termfolio_core::config::Config;
use termfolio_core::portfolio::Portfolio;

/// Runs the interactive portfolio terminal until the user quits.
pub fn run_portfolio(config: &Config, portfolio: Portfolio) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "termfolio needs an interactive terminal.\n\
             Use `termfolio run <COMMAND>` for non-interactive output."
        );
    }

    tracing::debug!(theme = %config.theme, sound = config.sound, "starting tui");
    let mut runtime = TuiRuntime::new(config, portfolio)?;
    runtime.run()
}
