use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "annie")]
#[command(about = "Annie - a desktop voice assistant with a webcam feed and local LLM chat")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.annie/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the assistant window (the default)
    Gui,

    /// Initialize a new ~/.annie/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Check that the speech tools, backend, and camera are available
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        Some(Commands::Check) => {
            cli::check::check_command(cli.config)?;
        }
        Some(Commands::Gui) | None => {
            annie::gui::run_gui(cli.config)?;
        }
    }

    Ok(())
}
