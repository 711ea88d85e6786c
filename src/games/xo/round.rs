//! Single-round state machine.
//!
//! A round starts `InProgress` with one side to move and ends in `Won`,
//! `Draw` or `Surrendered`. All three are terminal. Moves are validated in
//! full before anything changes, so a rejected move leaves the round as it
//! was.

use super::action::{GameError, Move};
use super::contracts::{Contract, MoveContract};
use super::ledger::ChipLedger;
use super::{Board, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Points awarded to the winner of a surrendered round.
pub const SURRENDER_POINTS: u32 = 9;

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are being accepted.
    InProgress,
    /// A side completed a line.
    Won(Side),
    /// The board filled with no line.
    Draw,
    /// The named side gave up and its opponent takes the round.
    Surrendered(Side),
}

impl RoundStatus {
    /// True once the round can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    /// Side that took the round, for wins and surrenders.
    pub fn winner(&self) -> Option<Side> {
        match self {
            RoundStatus::Won(side) => Some(*side),
            RoundStatus::Surrendered(loser) => Some(loser.opponent()),
            RoundStatus::InProgress | RoundStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundStatus::InProgress => write!(f, "In progress"),
            RoundStatus::Won(side) => write!(f, "{} wins", side),
            RoundStatus::Draw => write!(f, "Draw"),
            RoundStatus::Surrendered(loser) => {
                write!(f, "{} surrenders, {} wins", loser, loser.opponent())
            }
        }
    }
}

/// Points owed to a side for a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Award {
    /// Receiving side.
    pub side: Side,
    /// Points to add to its series score.
    pub points: u32,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Side that moved.
    pub side: Side,
    /// Cell the chip landed on.
    pub placed: usize,
    /// Cell freed by the chip limit, if any.
    pub evicted: Option<usize>,
    /// Round status after the move.
    pub status: RoundStatus,
}

/// Engine for one round: a board, a ledger per side, and the turn state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEngine {
    pub(super) board: Board,
    pub(super) ledgers: [ChipLedger; 2],
    turn: u32,
    current: Side,
    starting: Side,
    status: RoundStatus,
    winning_line: Option<[usize; 3]>,
    last_placed: Option<usize>,
    last_evicted: Option<usize>,
}

impl RoundEngine {
    /// Creates an active round with `starting` to move.
    #[instrument]
    pub fn new(starting: Side, max_chips: usize) -> Self {
        Self {
            board: Board::new(),
            ledgers: [
                ChipLedger::new(Side::First, max_chips),
                ChipLedger::new(Side::Second, max_chips),
            ],
            turn: 1,
            current: starting,
            starting,
            status: RoundStatus::InProgress,
            winning_line: None,
            last_placed: None,
            last_evicted: None,
        }
    }

    /// Places a chip for `side` on `index`.
    ///
    /// If the side already has its full allowance of chips, its oldest chip
    /// is cleared first. The move then either wins the round, draws it on a
    /// full board, or passes the turn.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn submit_move(&mut self, index: usize, side: Side) -> Result<MoveReport, GameError> {
        let action = Move::new(side, index);
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(%action, error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let eviction = self.ledgers[side.slot()].record_placement(index);
        if let Some(old) = eviction.cell() {
            debug!(old, "Clearing evicted chip");
            self.board.clear(old)?;
        }
        self.board.place(index, side)?;
        self.last_placed = Some(index);
        self.last_evicted = eviction.cell();

        if let Some(line) = self.board.winning_line(side) {
            info!(%side, ?line, turn = self.turn, "Round won");
            self.status = RoundStatus::Won(side);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            info!(turn = self.turn, "Round drawn");
            self.status = RoundStatus::Draw;
        } else {
            self.turn += 1;
            self.current = side.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(MoveReport {
            side,
            placed: index,
            evicted: self.last_evicted,
            status: self.status,
        })
    }

    /// Ends the round with `side` giving up. The other side takes the round.
    #[instrument(skip(self))]
    pub fn surrender(&mut self, side: Side) -> Result<Award, GameError> {
        if self.status.is_terminal() {
            warn!(%side, "Surrender after round ended");
            return Err(GameError::RoundInactive);
        }
        info!(%side, turn = self.turn, "Side surrendered");
        self.status = RoundStatus::Surrendered(side);
        Ok(Award::new(side.opponent(), SURRENDER_POINTS))
    }

    /// Points owed for the resolved round.
    ///
    /// A normal win is worth the turn number it landed on. A surrender is
    /// worth [`SURRENDER_POINTS`]. Draws and active rounds owe nothing.
    pub fn award(&self) -> Option<Award> {
        match self.status {
            RoundStatus::Won(side) => Some(Award::new(side, self.turn)),
            RoundStatus::Surrendered(loser) => Some(Award::new(loser.opponent(), SURRENDER_POINTS)),
            RoundStatus::InProgress | RoundStatus::Draw => None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ledger for `side`.
    pub fn ledger(&self, side: Side) -> &ChipLedger {
        &self.ledgers[side.slot()]
    }

    /// Side to move. After the round ends this is the side that moved last
    /// (or the side that was to move when the surrender came in).
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Side that opened the round.
    pub fn starting_side(&self) -> Side {
        self.starting
    }

    /// Turn number, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Line that won the round.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Cell of the last accepted chip.
    pub fn last_placed(&self) -> Option<usize> {
        self.last_placed
    }

    /// Cell freed by the last accepted move.
    pub fn last_evicted(&self) -> Option<usize> {
        self.last_evicted
    }
}
