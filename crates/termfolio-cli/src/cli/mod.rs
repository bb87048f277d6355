//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use termfolio_core::config;
use termfolio_core::theme::Theme;

mod commands;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(version)]
#[command(about = "Retro terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the theme from config
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<Theme>,

    /// Disable keystroke sounds
    #[arg(long, global = true)]
    mute: bool,

    /// Skip the boot banner and start at the prompt
    #[arg(long, global = true)]
    skip_boot: bool,

    /// Load the portfolio from a TOML file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    portfolio: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Resolve one command and print its output
    Run {
        /// The command line, e.g. `projects 2`
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,

        /// Print the lines as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available themes
    Themes,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Portfolio data utilities
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

#[derive(clap::Subcommand)]
enum PortfolioCommands {
    /// Print the built-in portfolio as TOML, a starting point for `portfolio_file`
    Export,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        theme,
        mute,
        skip_boot,
        portfolio,
    } = cli;

    let load_config = || -> Result<config::Config> {
        let mut config = config::Config::load().context("load config")?;
        if let Some(theme) = theme {
            config.theme = theme;
        }
        if mute {
            config.sound = false;
        }
        if skip_boot {
            config.skip_boot = true;
        }
        if let Some(path) = portfolio.clone() {
            config.portfolio_file = Some(path);
        }
        Ok(config)
    };

    // default to the interactive terminal
    let Some(command) = command else {
        return commands::tui::run(&load_config()?);
    };

    match command {
        Commands::Run { command, json } => commands::run::run(&load_config()?, &command, json),
        Commands::Themes => {
            commands::themes::list();
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Portfolio { command } => match command {
            PortfolioCommands::Export => {
                commands::portfolio::export();
                Ok(())
            }
        },
    }
}
