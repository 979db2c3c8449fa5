//! Command-line interface for strictly_bingo.

use clap::{Parser, Subcommand};

/// Strictly Bingo - keynote bingo in your terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_bingo")]
#[command(about = "Mark off a 5x5 bingo card as events happen", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "bingo.toml")]
    pub config: std::path::PathBuf,

    /// Seed for a reproducible shuffle (overrides the settings file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Disable the terminal bell
        #[arg(long)]
        mute: bool,

        /// File to write logs to while the board is on screen
        #[arg(long, default_value = "strictly_bingo.log")]
        log_file: std::path::PathBuf,
    },

    /// Print a freshly shuffled card and exit
    Card {
        /// Print the card as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
