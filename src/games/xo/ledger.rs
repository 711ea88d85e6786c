//! Per-side record of live chips.

use super::action::Eviction;
use super::{CELL_COUNT, Side};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Default number of chips a side may keep on the board.
pub const DEFAULT_MAX_CHIPS: usize = 3;

/// Ordered queue of the cells one side currently occupies.
///
/// The head is the oldest chip. Once the queue is at capacity, the next
/// placement pushes the head out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipLedger {
    side: Side,
    max_chips: usize,
    chips: VecDeque<usize>,
}

impl ChipLedger {
    /// Creates an empty ledger. `max_chips` is clamped to 1..=9.
    pub fn new(side: Side, max_chips: usize) -> Self {
        let max_chips = max_chips.clamp(1, CELL_COUNT);
        Self {
            side,
            max_chips,
            chips: VecDeque::with_capacity(max_chips + 1),
        }
    }

    /// Appends `index` as the newest chip and evicts the oldest on overflow.
    ///
    /// The caller must clear the evicted cell on the board.
    #[instrument(skip(self), fields(side = %self.side))]
    pub fn record_placement(&mut self, index: usize) -> Eviction {
        self.chips.push_back(index);
        if self.chips.len() > self.max_chips
            && let Some(oldest) = self.chips.pop_front()
        {
            debug!(oldest, "Evicting oldest chip");
            return Eviction::Evicted(oldest);
        }
        Eviction::NoEviction
    }

    /// Cell the next placement would evict, if the ledger is at capacity.
    pub fn pending_eviction(&self) -> Option<usize> {
        self.oldest()
    }

    /// Empties the ledger.
    pub fn reset(&mut self) {
        self.chips.clear();
    }

    /// Oldest chip. Only defined while the ledger is at capacity, since that
    /// is the chip the next placement removes.
    pub fn oldest(&self) -> Option<usize> {
        if self.is_full() {
            self.chips.front().copied()
        } else {
            None
        }
    }

    /// Most recently placed chip.
    pub fn newest(&self) -> Option<usize> {
        self.chips.back().copied()
    }

    /// Side this ledger belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Capacity.
    pub fn max_chips(&self) -> usize {
        self.max_chips
    }

    /// Number of live chips.
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// True when no chips are live.
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// True when the next placement will evict.
    pub fn is_full(&self) -> bool {
        self.chips.len() >= self.max_chips
    }

    /// Whether `index` is one of this side's live chips.
    pub fn contains(&self, index: usize) -> bool {
        self.chips.contains(&index)
    }

    /// Live chips, oldest first.
    pub fn chips(&self) -> impl Iterator<Item = usize> + '_ {
        self.chips.iter().copied()
    }
}
