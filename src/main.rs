//! Strictly XO - console game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Output};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::{self, Write};
use std::time::Duration;
use strictly_xo::console::{self, JsonRenderer, SessionEnd, TextRenderer};
use strictly_xo::{GameConfig, GameObserver, SeriesController};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run_console(config, &cli)
}

/// Merges the config file (if any) with command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config = config.with_mode(mode);
    }
    if let Some(max_chips) = cli.max_chips {
        config = config.with_max_chips(max_chips);
    }
    if let Some(max_rounds) = cli.max_rounds {
        config = config.with_max_rounds(max_rounds);
    }
    if let Some(first) = cli.first {
        config = config.with_first_player(Some(first));
    }
    if let Some(delay) = cli.bot_delay_ms {
        config = config.with_bot_delay_ms(delay);
    }

    config.validate()?;
    Ok(config)
}

/// Plays a series on stdin/stdout.
#[instrument(skip_all, fields(mode = %config.mode(), output = ?cli.output))]
fn run_console(config: GameConfig, cli: &Cli) -> Result<()> {
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let observer: Box<dyn GameObserver> = match cli.output {
        Output::Text => Box::new(TextRenderer::new(io::stdout())),
        Output::Json => Box::new(JsonRenderer::new(io::stdout())),
    };
    let bot_delay = Duration::from_millis(*config.bot_delay_ms());

    info!("Starting Strictly XO");
    let mut series = SeriesController::new(config, observer, rng)?;

    // Keep stdout for the board when it carries JSON.
    let end = match cli.output {
        Output::Text => {
            let mut out = io::stdout();
            writeln!(out, "{}", console::HELP)?;
            console::run(&mut series, io::stdin().lock(), &mut out, bot_delay)?
        }
        Output::Json => {
            console::run(&mut series, io::stdin().lock(), &mut io::stderr(), bot_delay)?
        }
    };

    if end == SessionEnd::Quit {
        info!("Goodbye");
    }
    Ok(())
}
