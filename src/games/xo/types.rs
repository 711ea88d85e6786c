//! Core domain types for limited-chip tic-tac-toe.

use super::action::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One of the two competing sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Side labelled X.
    #[strum(to_string = "X", serialize = "first")]
    #[serde(rename = "X", alias = "x")]
    First,
    /// Side labelled O.
    #[strum(to_string = "O", serialize = "second")]
    #[serde(rename = "O", alias = "o")]
    Second,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Board symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }

    /// Slot of this side in per-side arrays.
    pub(crate) fn slot(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No chip on the cell.
    #[default]
    Empty,
    /// A chip belonging to a side.
    Taken(Side),
}

impl Cell {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Taken(side) => Some(side),
        }
    }
}

/// 3x3 board stored in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of every empty cell, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Puts a chip for `side` on an empty cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, side: Side) -> Result<(), GameError> {
        match self.get(index) {
            None => Err(GameError::OutOfRange(index)),
            Some(Cell::Taken(_)) => Err(GameError::CellOccupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Taken(side);
                Ok(())
            }
        }
    }

    /// Empties a cell. Clearing an already empty cell is a no-op.
    #[instrument(skip(self))]
    pub fn clear(&mut self, index: usize) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfRange(index))?;
        if *cell == Cell::Empty {
            debug!(index, "Cell already empty");
        }
        *cell = Cell::Empty;
        Ok(())
    }

    /// Empties every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// First line fully owned by `side`, in scan order.
    pub fn winning_line(&self, side: Side) -> Option<[usize; 3]> {
        super::rules::winning_line(self, side)
    }

    /// Checks whether `side` owns a complete line.
    pub fn has_line(&self, side: Side) -> bool {
        self.winning_line(side).is_some()
    }

    /// Empty cell that would complete a line for `side`.
    pub fn completing_cell(&self, side: Side) -> Option<usize> {
        super::rules::completing_cell(self, side)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Number of chips `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Taken(side))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Taken(side) => write!(f, "{}", side.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
