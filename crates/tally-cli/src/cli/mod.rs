//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::config;
use tally_core::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Sign in, count clicks, review the session")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Dispatch intents from a script and print each resulting view
    Replay {
        /// Read intents from this file instead of stdin
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write the default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::Replay { file, json }) => {
            let config = config::Config::load().context("load config")?;
            logging::init(&config.log, LogTarget::Stderr)?;
            commands::replay::run(file.as_deref(), json)
        }
        None => {
            let config = config::Config::load().context("load config")?;
            // Held until exit so buffered log lines are flushed.
            let _guard = logging::init(&config.log, LogTarget::File)?;
            commands::interactive::run(&config)
        }
    }
}
