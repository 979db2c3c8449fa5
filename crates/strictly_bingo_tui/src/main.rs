//! Strictly Bingo - Unified CLI
//!
//! Play keynote bingo in the terminal, or print a card and exit.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_bingo_tui::{BingoSettings, Cli, Command, render_card, run_tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = BingoSettings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if cli.seed.is_some() {
        settings = settings.with_seed(cli.seed);
    }

    match cli.command {
        Command::Play { mute, log_file } => {
            if mute {
                settings = settings.with_sound_enabled(false);
            }
            run_play(&settings, &log_file)
        }
        Command::Card { json } => run_card(&settings, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive board, logging to a file to keep the screen clean
fn run_play(settings: &BingoSettings, log_file: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    run_tui(settings)
}

/// Print a single card to stdout
fn run_card(settings: &BingoSettings, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", render_card(settings, json)?);
    Ok(())
}
