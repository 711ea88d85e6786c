//! First-class invariants for a round.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They can be tested on their own and double as documentation of
//! what the engine guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod board_matches_ledgers;
pub mod chip_limit;
pub mod disjoint_ledgers;

pub use board_matches_ledgers::BoardMatchesLedgersInvariant;
pub use chip_limit::ChipLimitInvariant;
pub use disjoint_ledgers::DisjointLedgersInvariant;

/// All round invariants as a composable set.
pub type RoundInvariants = (
    BoardMatchesLedgersInvariant,
    DisjointLedgersInvariant,
    ChipLimitInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::xo::{RoundEngine, Side};

    #[test]
    fn test_invariant_set_holds_for_fresh_round() {
        let round = RoundEngine::new(Side::First, 3);
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_evictions() {
        let mut round = RoundEngine::new(Side::First, 3);
        let moves = [
            (0, Side::First),
            (4, Side::Second),
            (1, Side::First),
            (5, Side::Second),
            (6, Side::First),
            (2, Side::Second),
            (8, Side::First), // evicts 0
            (3, Side::Second), // evicts 4
        ];
        for (index, side) in moves {
            round.submit_move(index, side).unwrap();
            assert!(RoundInvariants::check_all(&round).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut round = RoundEngine::new(Side::First, 3);
        round.submit_move(4, Side::First).unwrap();
        round.board.clear(4).unwrap();

        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            BoardMatchesLedgersInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let round = RoundEngine::new(Side::Second, 3);
        type TwoInvariants = (DisjointLedgersInvariant, ChipLimitInvariant);
        assert!(TwoInvariants::check_all(&round).is_ok());
    }
}
