//! Interactive terminal handler.

use std::fs;

use anyhow::{Context, Result};
use termfolio_core::config::{Config, paths};
use termfolio_core::portfolio::Portfolio;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TERMFOLIO_LOG";
const LOG_FILE: &str = "termfolio.log";

pub fn run(config: &Config) -> Result<()> {
    let portfolio = Portfolio::load(config.portfolio_file.as_deref())?;
    let _guard = init_logging();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let _enter = rt.enter();
    termfolio_tui::run_portfolio(config, portfolio)
}

/// Routes tracing to a file while the UI owns the terminal. Returns `None`
/// when the log directory cannot be created.
fn init_logging() -> Option<WorkerGuard> {
    let dir = paths::logs_dir();
    if let Err(err) = fs::create_dir_all(&dir) {
        eprintln!("Warning: logging disabled, cannot create {}: {err}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();
    Some(guard)
}
