//! Limited-chip tic-tac-toe.
//!
//! Each side keeps at most `max_chips` chips on the board; a further
//! placement removes that side's oldest chip. Rounds are grouped into a
//! scored series, and a heuristic bot can take one side.

mod action;
pub mod bot;
pub mod contracts;
mod events;
pub mod invariants;
mod ledger;
mod position;
mod round;
pub mod rules;
mod series;
mod types;

pub use action::{Eviction, GameError, Move};
pub use events::{ChipView, EventLog, GameEvent, GameObserver, Snapshot};
pub use ledger::{ChipLedger, DEFAULT_MAX_CHIPS};
pub use position::Position;
pub use round::{Award, MoveReport, RoundEngine, RoundStatus, SURRENDER_POINTS};
pub use series::{RoundRecord, Scoreboard, SeriesController, SeriesResult};
pub use types::{Board, CELL_COUNT, Cell, Side};
