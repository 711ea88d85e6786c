//! Strictly XO - limited-chip tic-tac-toe
//!
//! Two sides take turns placing chips on a 3x3 board, but each side may
//! keep only a few chips at once: placing one more removes that side's
//! oldest chip. Rounds are scored and grouped into a series, and a
//! heuristic bot can play one side.
//!
//! # Architecture
//!
//! - **Board / ChipLedger**: occupancy and the chip limit
//! - **RoundEngine**: one round's state machine
//! - **SeriesController**: rounds, scores and observer notifications
//! - **bot**: one-ply heuristic opponent
//! - **console**: line-oriented front end used by the binary
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use strictly_xo::{GameConfig, RoundStatus, SeriesController, Side};
//!
//! let config = GameConfig::default().with_first_player(Some(Side::First));
//! let mut series = SeriesController::new(config, (), SmallRng::seed_from_u64(1))?;
//!
//! let opening = [
//!     (0, Side::First),
//!     (4, Side::Second),
//!     (1, Side::First),
//!     (8, Side::Second),
//! ];
//! for (cell, side) in opening {
//!     series.submit_move(cell, side)?;
//! }
//! let report = series.submit_move(2, Side::First)?;
//! assert_eq!(report.status, RoundStatus::Won(Side::First));
//! assert_eq!(series.scores().first, 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod config;
pub mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, GameMode, StartingSide};

// Crate-level exports - Game types
pub use games::xo::{
    Award, Board, CELL_COUNT, Cell, ChipLedger, ChipView, DEFAULT_MAX_CHIPS, EventLog, Eviction,
    GameError, GameEvent, GameObserver, Move, MoveReport, Position, RoundEngine, RoundRecord,
    RoundStatus, SURRENDER_POINTS, Scoreboard, SeriesController, SeriesResult, Side, Snapshot,
    bot, contracts, invariants, rules,
};
