//! Contract-based validation for moves.
//!
//! Preconditions are checked on every move, before any state changes.
//! Postconditions re-check the round's invariants and run in debug builds.

use super::action::{GameError, Move};
use super::invariants::{InvariantSet, RoundInvariants};
use super::round::RoundEngine;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the round has not been resolved.
pub struct RoundIsActive;

impl RoundIsActive {
    /// Fails with `RoundInactive` once the round is resolved.
    #[instrument(skip(round))]
    pub fn check(round: &RoundEngine) -> Result<(), GameError> {
        if round.is_active() {
            Ok(())
        } else {
            Err(GameError::RoundInactive)
        }
    }
}

/// Precondition: it must be the side's turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Fails with `NotYourTurn` for the side not to move.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundEngine) -> Result<(), GameError> {
        if mov.side != round.current_side() {
            Err(GameError::NotYourTurn(mov.side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell exists and is empty.
pub struct CellIsFree;

impl CellIsFree {
    /// Fails with `OutOfRange` or `CellOccupied`.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundEngine) -> Result<(), GameError> {
        match round.board().get(mov.index) {
            None => Err(GameError::OutOfRange(mov.index)),
            Some(cell) if cell.owner().is_some() => Err(GameError::CellOccupied(mov.index)),
            Some(_) => Ok(()),
        }
    }
}

/// Composite precondition, checked in the order the errors are reported.
pub struct LegalMove;

impl LegalMove {
    /// Runs every move precondition.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundEngine) -> Result<(), GameError> {
        RoundIsActive::check(round)?;
        SidesTurn::check(mov, round)?;
        CellIsFree::check(mov, round)?;
        Ok(())
    }
}

/// Contract for chip placements.
///
/// Preconditions:
/// - Round is active
/// - Side is to move
/// - Cell is in range and empty
///
/// Postconditions:
/// - Board and ledgers agree
/// - Ledgers are disjoint
/// - No ledger exceeds its chip limit
/// - Turn counter never decreases
pub struct MoveContract;

impl Contract<RoundEngine, Move> for MoveContract {
    fn pre(round: &RoundEngine, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, round)
    }

    fn post(before: &RoundEngine, after: &RoundEngine) -> Result<(), GameError> {
        if after.turn() < before.turn() {
            tracing::error!(
                before = before.turn(),
                after = after.turn(),
                "Turn counter went backwards"
            );
            return Err(GameError::InvariantViolation);
        }
        RoundInvariants::check_all(after).map_err(|violations| {
            for v in &violations {
                tracing::error!(violation = %v.description, "Postcondition failed");
            }
            GameError::InvariantViolation
        })
    }
}
