//! Disjoint ledgers: no cell is claimed by both sides.

use super::super::{RoundEngine, Side};
use super::Invariant;

/// Invariant: the two ledgers share no cell.
pub struct DisjointLedgersInvariant;

impl Invariant<RoundEngine> for DisjointLedgersInvariant {
    fn holds(round: &RoundEngine) -> bool {
        let second = round.ledger(Side::Second);
        round.ledger(Side::First).chips().all(|i| !second.contains(i))
    }

    fn description() -> &'static str {
        "No cell is claimed by both sides"
    }
}
