//! Notifications from the engine to whatever renders it.
//!
//! The engine never draws anything. After each transition it hands a
//! [`Snapshot`] to a [`GameObserver`], and the observer decides how to
//! show (or animate) the change.

use super::round::RoundStatus;
use super::series::{RoundRecord, Scoreboard, SeriesResult};
use super::{CELL_COUNT, Cell, Side};
use serde::{Deserialize, Serialize};

/// One side's live chips, for highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipView {
    /// Owner.
    pub side: Side,
    /// Live chips, oldest first.
    pub chips: Vec<usize>,
    /// Chip the next placement will remove (only at capacity).
    pub oldest: Option<usize>,
    /// Most recent chip.
    pub newest: Option<usize>,
}

/// Full picture of the game after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board cells, row-major.
    pub cells: [Cell; CELL_COUNT],
    /// Side to move.
    pub current_side: Side,
    /// Turn number within the round.
    pub turn: u32,
    /// Round status.
    pub status: RoundStatus,
    /// Line that won the round, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Cell of the last accepted chip.
    pub last_placed: Option<usize>,
    /// Cell freed by the last accepted move.
    pub last_evicted: Option<usize>,
    /// Live chips per side, First then Second.
    pub chips: [ChipView; 2],
    /// Cumulative series score.
    pub scores: Scoreboard,
    /// Round counter (exceeds `max_rounds` once the series is over).
    pub round: u32,
    /// Rounds in the series.
    pub max_rounds: u32,
    /// Summary of every resolved round.
    pub rounds: Vec<RoundRecord>,
    /// Side with the strictly higher score.
    pub leader: Option<Side>,
    /// Set once the series is over.
    pub series_result: Option<SeriesResult>,
}

/// Receives engine notifications. Every method defaults to doing nothing.
pub trait GameObserver {
    /// Called after every accepted move, surrender, round start and series reset.
    fn on_state_changed(&mut self, _snapshot: &Snapshot) {}

    /// Called once when a round resolves.
    fn on_round_end(&mut self, _status: &RoundStatus, _winning_line: Option<[usize; 3]>) {}

    /// Called once when the last round has been played and the series advanced.
    fn on_series_end(&mut self, _result: &SeriesResult) {}
}

impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        (**self).on_state_changed(snapshot);
    }

    fn on_round_end(&mut self, status: &RoundStatus, winning_line: Option<[usize; 3]>) {
        (**self).on_round_end(status, winning_line);
    }

    fn on_series_end(&mut self, result: &SeriesResult) {
        (**self).on_series_end(result);
    }
}

/// Notification as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Game state updated.
    StateChanged {
        /// State after the transition.
        snapshot: Box<Snapshot>,
    },
    /// A round resolved.
    RoundEnded {
        /// How it resolved.
        status: RoundStatus,
        /// Winning line for normal wins.
        winning_line: Option<[usize; 3]>,
    },
    /// The series finished.
    SeriesEnded {
        /// Overall result.
        result: SeriesResult,
    },
}

/// Observer that keeps every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Most recent snapshot.
    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::StateChanged { snapshot } => Some(snapshot.as_ref()),
            _ => None,
        })
    }

    /// Round endings seen so far.
    pub fn round_ends(&self) -> Vec<RoundStatus> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::RoundEnded { status, .. } => Some(*status),
                _ => None,
            })
            .collect()
    }

    /// Drops every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        self.events.push(GameEvent::StateChanged {
            snapshot: Box::new(snapshot.clone()),
        });
    }

    fn on_round_end(&mut self, status: &RoundStatus, winning_line: Option<[usize; 3]>) {
        self.events.push(GameEvent::RoundEnded {
            status: *status,
            winning_line,
        });
    }

    fn on_series_end(&mut self, result: &SeriesResult) {
        self.events.push(GameEvent::SeriesEnded { result: *result });
    }
}
