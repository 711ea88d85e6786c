//! Move requests and the errors they can raise.
//!
//! A move is a domain event: a side's intent to put a chip on a cell. It is
//! validated as a whole before anything on the board changes.

use super::Side;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A side asking to place a chip on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side placing the chip.
    pub side: Side,
    /// Target cell (0-8, row-major).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.index)
    }
}

/// Whether placing a chip pushed the side's oldest chip off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eviction {
    /// The ledger was at capacity; this cell was freed.
    Evicted(usize),
    /// The ledger had room.
    NoEviction,
}

impl Eviction {
    /// Freed cell, if any.
    #[instrument]
    pub fn cell(self) -> Option<usize> {
        match self {
            Eviction::Evicted(index) => Some(index),
            Eviction::NoEviction => None,
        }
    }
}

/// A rejected request. Every variant is recoverable and leaves game state
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Target cell already holds a chip.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The side is not the one to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Side),

    /// The round has already been resolved.
    #[display("Round is no longer active")]
    RoundInactive,

    /// The bot was asked to move on a full board.
    #[display("No move available")]
    NoMoveAvailable,

    /// The next round was requested before the current one finished.
    #[display("Round is still in progress")]
    RoundStillActive,

    /// The series has already finished.
    #[display("Series is over")]
    SeriesOver,

    /// A postcondition failed after a move (debug builds only).
    #[display("Invariant violation after move")]
    InvariantViolation,
}
