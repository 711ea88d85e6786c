//! Command-line interface for strictly_xo.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use strictly_xo::{GameMode, Side};

/// Strictly XO - limited-chip tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_xo")]
#[command(about = "Limited-chip tic-tac-toe series against a friend or a bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Play mode: pvp or bot
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Live chips allowed per side
    #[arg(long)]
    pub max_chips: Option<usize>,

    /// Rounds in the series
    #[arg(long)]
    pub max_rounds: Option<u32>,

    /// Side that opens round 1 (X or O); random when omitted
    #[arg(long)]
    pub first: Option<Side>,

    /// Pause before each bot move, in milliseconds
    #[arg(long)]
    pub bot_delay_ms: Option<u64>,

    /// Seed for the random source (starting side and bot tie-breaks)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How game state is printed
    #[arg(short, long, value_enum, default_value_t = Output::Text)]
    pub output: Output,
}

/// Rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Board drawn as text
    Text,
    /// One JSON event per line
    Json,
}
