//! Line-oriented console front end.
//!
//! Reads one command per line, feeds it to a [`SeriesController`] and lets
//! the controller's observer draw the result. In bot mode the bot's turns
//! are played automatically after a short pause.

mod input;
mod render;

pub use input::{Command, HELP, parse};
pub use render::{JsonRenderer, TextRenderer, board_text, status_line};

use crate::games::xo::{GameError, GameObserver, SeriesController, Side};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed `quit`.
    Quit,
    /// Input ran out.
    EndOfInput,
}

/// Plays `series` from `input` until the player quits or input runs out.
///
/// Prompts and rejections go to `out`; the board itself is drawn by the
/// series' observer.
#[instrument(skip_all, fields(bot_delay_ms = bot_delay.as_millis() as u64))]
pub fn run<O, R, I, W>(
    series: &mut SeriesController<O, R>,
    input: I,
    out: &mut W,
    bot_delay: Duration,
) -> Result<SessionEnd>
where
    O: GameObserver,
    R: Rng,
    I: BufRead,
    W: Write,
{
    info!("Console session started");
    let mut lines = input.lines();

    loop {
        if series.is_bot_turn() {
            if !bot_delay.is_zero() {
                std::thread::sleep(bot_delay);
            }
            series.play_bot_move()?;
            continue;
        }

        write!(out, "{}", prompt(series))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed");
            return Ok(SessionEnd::EndOfInput);
        };
        let line = line?;

        let command = match parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        let outcome = match command {
            Command::Place(index) => {
                let side = series.round().current_side();
                series.submit_move(index, side).map(|_| ())
            }
            Command::Surrender => {
                let side = human_side(series);
                series.surrender(side).map(|_| ())
            }
            Command::Next => series.advance_round(),
            Command::Reset => {
                series.reset_series();
                Ok(())
            }
            Command::Show => {
                let snapshot = series.snapshot();
                writeln!(out, "{}\n{}", status_line(&snapshot), board_text(&snapshot))?;
                Ok(())
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                Ok(())
            }
            Command::Quit => {
                info!("Player quit");
                return Ok(SessionEnd::Quit);
            }
        };

        if let Err(e) = outcome {
            writeln!(out, "{}", explain(&e))?;
        }
    }
}

/// Side a surrender applies to: the human in bot mode, otherwise the side to move.
fn human_side<O: GameObserver, R: Rng>(series: &SeriesController<O, R>) -> Side {
    match series.config().bot() {
        Some(bot) => bot.opponent(),
        None => series.round().current_side(),
    }
}

fn prompt<O: GameObserver, R: Rng>(series: &SeriesController<O, R>) -> String {
    if series.is_series_complete() {
        "Series over. 'r' to play again, 'q' to quit > ".to_string()
    } else if !series.round().is_active() {
        if series.is_final_round() {
            "Last round played. 'n' for the final result > ".to_string()
        } else {
            "Round over. 'n' for the next round > ".to_string()
        }
    } else {
        format!("{} > ", series.round().current_side())
    }
}

fn explain(error: &GameError) -> String {
    match error {
        GameError::CellOccupied(index) => format!("Cell {} is taken. Try another cell.", index + 1),
        GameError::OutOfRange(_) | GameError::NotYourTurn(_) => format!("{}.", error),
        GameError::RoundInactive => "The round is over. Type 'n' to continue.".to_string(),
        GameError::RoundStillActive => "Finish the round first (or 's' to surrender).".to_string(),
        GameError::SeriesOver => "The series is over. Type 'r' to play again.".to_string(),
        GameError::NoMoveAvailable | GameError::InvariantViolation => error.to_string(),
    }
}
