//! Draw detection logic.

use super::super::{Board, Cell, Side};
use super::win::winning_line;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board where neither side owns a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
        && winning_line(board, Side::First).is_none()
        && winning_line(board, Side::Second).is_none()
}
