//! Board/ledger agreement: the chips on the board are exactly the ledgers' chips.

use super::super::{CELL_COUNT, Cell, RoundEngine, Side};
use super::Invariant;

/// Invariant: every occupied cell is recorded in its owner's ledger, and
/// every ledger entry is a cell its side occupies.
pub struct BoardMatchesLedgersInvariant;

impl Invariant<RoundEngine> for BoardMatchesLedgersInvariant {
    fn holds(round: &RoundEngine) -> bool {
        let board = round.board();

        let board_agrees = (0..CELL_COUNT).all(|i| match board.get(i) {
            Some(Cell::Taken(side)) => round.ledger(side).contains(i),
            Some(Cell::Empty) => {
                !round.ledger(Side::First).contains(i) && !round.ledger(Side::Second).contains(i)
            }
            None => false,
        });

        let ledgers_agree = [Side::First, Side::Second].into_iter().all(|side| {
            round
                .ledger(side)
                .chips()
                .all(|i| board.get(i) == Some(Cell::Taken(side)))
        });

        board_agrees && ledgers_agree
    }

    fn description() -> &'static str {
        "Occupied cells equal the union of both ledgers"
    }
}
