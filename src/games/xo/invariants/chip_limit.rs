//! Chip limit: neither side holds more chips than allowed.

use super::super::{RoundEngine, Side};
use super::Invariant;

/// Invariant: each ledger holds at most `max_chips` entries.
pub struct ChipLimitInvariant;

impl Invariant<RoundEngine> for ChipLimitInvariant {
    fn holds(round: &RoundEngine) -> bool {
        [Side::First, Side::Second].into_iter().all(|side| {
            let ledger = round.ledger(side);
            ledger.len() <= ledger.max_chips() && round.board().count(side) <= ledger.max_chips()
        })
    }

    fn description() -> &'static str {
        "No side exceeds its chip limit"
    }
}
