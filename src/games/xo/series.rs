//! Best-of-N series of rounds.
//!
//! The controller owns the active round, the cumulative scores and the
//! per-round summaries. Resolved rounds are dropped once their outcome has
//! been recorded.

use super::Side;
use super::action::GameError;
use super::bot;
use super::events::{ChipView, GameObserver, Snapshot};
use super::round::{Award, MoveReport, RoundEngine, RoundStatus};
use crate::config::{ConfigError, GameConfig, StartingSide};
use rand::Rng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Cumulative points per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Points for the First side.
    pub first: u32,
    /// Points for the Second side.
    pub second: u32,
}

impl Scoreboard {
    /// Points held by `side`.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Credits an award.
    pub fn add(&mut self, award: Award) {
        match award.side {
            Side::First => self.first += award.points,
            Side::Second => self.second += award.points,
        }
    }

    /// Side with the strictly greater score.
    pub fn leader(&self) -> Option<Side> {
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Overall outcome of a finished series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesResult {
    /// One side finished with strictly more points.
    Winner(Side),
    /// Equal points.
    Tie,
}

impl From<&Scoreboard> for SeriesResult {
    fn from(scores: &Scoreboard) -> Self {
        scores.leader().map_or(SeriesResult::Tie, SeriesResult::Winner)
    }
}

impl std::fmt::Display for SeriesResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesResult::Winner(side) => write!(f, "{} wins the series", side),
            SeriesResult::Tie => write!(f, "Series tied"),
        }
    }
}

/// Summary of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u32,
    /// Side that opened the round.
    pub starting_side: Side,
    /// How the round ended.
    pub status: RoundStatus,
    /// Points awarded (0 for a draw).
    pub points: u32,
}

/// Runs a series of rounds and notifies an observer of every change.
pub struct SeriesController<O = (), R = SmallRng> {
    config: GameConfig,
    round: RoundEngine,
    round_number: u32,
    scores: Scoreboard,
    last_round_winner: Option<Side>,
    records: Vec<RoundRecord>,
    observer: O,
    rng: R,
}

impl<O: GameObserver, R: Rng> SeriesController<O, R> {
    /// Creates a series and starts round 1.
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    #[instrument(skip(observer, rng))]
    pub fn new(config: GameConfig, observer: O, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let round = RoundEngine::new(Side::First, *config.max_chips());
        let mut series = Self {
            config,
            round,
            round_number: 1,
            scores: Scoreboard::default(),
            last_round_winner: None,
            records: Vec::new(),
            observer,
            rng,
        };
        series.start_round();
        Ok(series)
    }

    /// Replaces the active round with a fresh one at the current round number.
    ///
    /// The loser of the most recent decided round opens. Before any round has
    /// been decided the configured starting rule applies.
    #[instrument(skip(self), fields(round = self.round_number))]
    pub fn start_round(&mut self) {
        let starting = match self.last_round_winner {
            Some(winner) => winner.opponent(),
            None => match self.config.starting_side() {
                StartingSide::Fixed(side) => side,
                StartingSide::Random => {
                    if self.rng.random_bool(0.5) {
                        Side::First
                    } else {
                        Side::Second
                    }
                }
            },
        };
        info!(%starting, "Starting round");
        self.round = RoundEngine::new(starting, *self.config.max_chips());
        self.notify_state();
    }

    /// Places a chip for `side`. On a deciding move the round is scored and
    /// recorded.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize, side: Side) -> Result<MoveReport, GameError> {
        self.ensure_running()?;
        let report = self.round.submit_move(index, side)?;
        self.after_transition();
        Ok(report)
    }

    /// `side` gives up the round; the opponent is credited with a full win.
    #[instrument(skip(self))]
    pub fn surrender(&mut self, side: Side) -> Result<Award, GameError> {
        self.ensure_running()?;
        let award = self.round.surrender(side)?;
        self.after_transition();
        Ok(award)
    }

    /// Lets the bot take its turn.
    ///
    /// Only valid in bot mode while the bot's side is to move.
    #[instrument(skip(self))]
    pub fn play_bot_move(&mut self) -> Result<MoveReport, GameError> {
        self.ensure_running()?;
        let Some(bot_side) = self.config.bot() else {
            warn!("Bot move requested without a bot");
            return Err(GameError::NotYourTurn(self.round.current_side()));
        };
        if !self.round.is_active() {
            return Err(GameError::RoundInactive);
        }
        if self.round.current_side() != bot_side {
            warn!(%bot_side, "Bot move requested out of turn");
            return Err(GameError::NotYourTurn(bot_side));
        }
        let index = bot::pick_move(self.round.board(), bot_side, &mut self.rng)?;
        self.submit_move(index, bot_side)
    }

    /// Moves past a resolved round.
    ///
    /// Starts the next round, or ends the series once the last round has
    /// been played.
    #[instrument(skip(self), fields(round = self.round_number))]
    pub fn advance_round(&mut self) -> Result<(), GameError> {
        self.ensure_running()?;
        if self.round.is_active() {
            warn!("Advance requested mid-round");
            return Err(GameError::RoundStillActive);
        }

        self.round_number += 1;
        if self.is_series_complete() {
            let result = SeriesResult::from(&self.scores);
            info!(%result, first = self.scores.first, second = self.scores.second, "Series over");
            self.notify_state();
            self.observer.on_series_end(&result);
        } else {
            self.start_round();
        }
        Ok(())
    }

    /// Zeroes the scores and round counter and starts round 1 again.
    #[instrument(skip(self))]
    pub fn reset_series(&mut self) {
        info!("Resetting series");
        self.scores = Scoreboard::default();
        self.round_number = 1;
        self.last_round_winner = None;
        self.records.clear();
        self.start_round();
    }

    /// True once every round has been played and advanced past.
    pub fn is_series_complete(&self) -> bool {
        self.round_number > *self.config.max_rounds()
    }

    /// Final result, once the series is complete.
    pub fn series_result(&self) -> Option<SeriesResult> {
        self.is_series_complete()
            .then(|| SeriesResult::from(&self.scores))
    }

    /// True while the active round is the last of the series.
    pub fn is_final_round(&self) -> bool {
        self.round_number == *self.config.max_rounds()
    }

    /// True when the bot is configured and its side is to move.
    pub fn is_bot_turn(&self) -> bool {
        !self.is_series_complete()
            && self.round.is_active()
            && self.config.bot() == Some(self.round.current_side())
    }

    /// Side with the strictly greater score.
    pub fn leader(&self) -> Option<Side> {
        self.scores.leader()
    }

    /// Active (or just resolved) round.
    pub fn round(&self) -> &RoundEngine {
        &self.round
    }

    /// Current round number, starting at 1.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Rounds in the series.
    pub fn max_rounds(&self) -> u32 {
        *self.config.max_rounds()
    }

    /// Cumulative scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Winner of the most recent decided round.
    pub fn last_round_winner(&self) -> Option<Side> {
        self.last_round_winner
    }

    /// Summaries of resolved rounds.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// Series settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Attached observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Attached observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Builds the current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let view = |side: Side| {
            let ledger = self.round.ledger(side);
            ChipView {
                side,
                chips: ledger.chips().collect(),
                oldest: ledger.oldest(),
                newest: ledger.newest(),
            }
        };
        Snapshot {
            cells: *self.round.board().cells(),
            current_side: self.round.current_side(),
            turn: self.round.turn(),
            status: self.round.status(),
            winning_line: self.round.winning_line(),
            last_placed: self.round.last_placed(),
            last_evicted: self.round.last_evicted(),
            chips: [view(Side::First), view(Side::Second)],
            scores: self.scores,
            round: self.round_number,
            max_rounds: *self.config.max_rounds(),
            rounds: self.records.clone(),
            leader: self.scores.leader(),
            series_result: self.series_result(),
        }
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_series_complete() {
            warn!("Request after series ended");
            return Err(GameError::SeriesOver);
        }
        Ok(())
    }

    fn after_transition(&mut self) {
        let status = self.round.status();
        if status.is_terminal() {
            self.resolve_round(status);
            self.notify_state();
            self.observer
                .on_round_end(&status, self.round.winning_line());
        } else {
            self.notify_state();
        }
    }

    fn resolve_round(&mut self, status: RoundStatus) {
        let award = self.round.award();
        if let Some(award) = award {
            self.scores.add(award);
        }
        if let Some(winner) = status.winner() {
            self.last_round_winner = Some(winner);
        }
        let record = RoundRecord {
            round: self.round_number,
            starting_side: self.round.starting_side(),
            status,
            points: award.map_or(0, |a| a.points),
        };
        debug!(?record, first = self.scores.first, second = self.scores.second, "Round recorded");
        self.records.push(record);
    }

    fn notify_state(&mut self) {
        let snapshot = self.snapshot();
        self.observer.on_state_changed(&snapshot);
    }
}
