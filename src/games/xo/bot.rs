//! Heuristic computer opponent.
//!
//! One-ply priority cascade over the current occupancy: win, block, center,
//! corner, edge, anything. There is no search, and upcoming evictions are
//! not considered.

use super::action::GameError;
use super::{Board, Position, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Why the bot chose its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Reason {
    /// Completes one of the bot's lines.
    Win,
    /// Denies the opponent a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a free corner.
    Corner,
    /// Takes a free edge.
    Edge,
    /// Any free cell.
    Fallback,
}

/// Picks a cell for `side` on `board`.
///
/// Random choices (corners, edges, fallback) draw from `rng`, so a seeded
/// generator gives repeatable play.
#[instrument(skip(board, rng))]
pub fn pick_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    rng: &mut R,
) -> Result<usize, GameError> {
    let (index, reason) = choose(board, side, rng)?;
    debug!(index, %reason, "Bot chose cell");
    Ok(index)
}

/// Like [`pick_move`] but also reports which rule fired.
pub fn choose<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    rng: &mut R,
) -> Result<(usize, Reason), GameError> {
    if let Some(index) = board.completing_cell(side) {
        return Ok((index, Reason::Win));
    }

    if let Some(index) = board.completing_cell(side.opponent()) {
        return Ok((index, Reason::Block));
    }

    if board.is_empty(Position::Center.to_index()) {
        return Ok((Position::Center.to_index(), Reason::Center));
    }

    if let Some(index) = random_free(board, &Position::CORNERS, rng) {
        return Ok((index, Reason::Corner));
    }

    if let Some(index) = random_free(board, &Position::EDGES, rng) {
        return Ok((index, Reason::Edge));
    }

    board
        .empty_cells()
        .choose(rng)
        .map(|&index| (index, Reason::Fallback))
        .ok_or(GameError::NoMoveAvailable)
}

fn random_free<R: Rng + ?Sized>(board: &Board, group: &[Position], rng: &mut R) -> Option<usize> {
    let free: Vec<usize> = group
        .iter()
        .map(|pos| pos.to_index())
        .filter(|&i| board.is_empty(i))
        .collect();
    free.choose(rng).copied()
}
