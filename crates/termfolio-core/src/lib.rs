//! Core of termfolio: portfolio data, the command resolver and configuration.
//!
//! Nothing in this crate touches the terminal; the TUI crate drives it.

pub mod commands;
pub mod config;
pub mod contact;
pub mod line;
pub mod portfolio;
pub mod theme;
