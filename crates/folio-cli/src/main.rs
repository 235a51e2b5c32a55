use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio content file (overrides the configured path)
    #[arg(short = 'f', long = "file", global = true)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Write a starter portfolio file
    Init {
        /// Destination path (defaults to the configured portfolio path)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Load and validate a portfolio file
    Check,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, cli.file),
        Some(Commands::Init { path, force }) => commands::init::run(&config, path, force),
        Some(Commands::Check) => commands::check::run(&config, cli.file),
    }
}
