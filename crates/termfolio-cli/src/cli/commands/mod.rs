//! CLI command handlers.

pub mod config;
pub mod portfolio;
pub mod run;
pub mod themes;
pub mod tui;
