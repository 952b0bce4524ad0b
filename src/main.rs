use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cram::app::App;
use cram::model::{loader, seed};

/// A terminal flashcard app: manage decks, then study them with
/// flip-to-reveal cards in sequential or random order.
#[derive(Debug, Parser)]
#[command(name = "cram", version, about)]
struct Args {
    /// Load the initial deck collection from a JSON file
    #[arg(long, value_name = "PATH")]
    decks: Option<PathBuf>,

    /// Start with an empty collection instead of the built-in demo decks
    #[arg(long)]
    no_seed: bool,

    /// Append tracing output to this file (the terminal stays clean)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Resolve the initial collection before touching the terminal, so load
    // errors print as plain errors.
    let decks = match &args.decks {
        Some(path) => loader::load_decks(path)?,
        None if args.no_seed => Vec::new(),
        None => seed::demo_decks(),
    };
    tracing::info!(decks = decks.len(), "starting");

    let terminal = ratatui::init();
    let mut app = App::new(decks);
    let result = app.run(terminal);
    ratatui::restore();
    result.context("terminal event loop failed")
}
