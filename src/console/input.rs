//! Parsing of typed commands.

use crate::games::xo::Position;
use tracing::instrument;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Put a chip on a cell (0-based index).
    Place(usize),
    /// Give up the current round.
    Surrender,
    /// Start the next round.
    Next,
    /// Start the series over.
    Reset,
    /// Redraw the board.
    Show,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Commands:
  1-9 or a cell name (e.g. 'center', 'top left')  place a chip
  s, surrender                                    give up this round
  n, next                                         start the next round
  r, reset                                        start the series over
  b, board                                        show the board
  h, help                                         show this help
  q, quit                                         leave";

/// Parses one line of input.
#[instrument]
pub fn parse(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let command = match trimmed.to_lowercase().as_str() {
        "" => return Err("Type a cell (1-9) or 'h' for help".to_string()),
        "s" | "surrender" => Command::Surrender,
        "n" | "next" => Command::Next,
        "r" | "reset" => Command::Reset,
        "b" | "board" => Command::Show,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Position::from_label_or_number(trimmed)
            .map(|pos| Command::Place(pos.to_index()))
            .ok_or_else(|| format!("Unknown command or cell: {}", trimmed))?,
    };
    Ok(command)
}
