//! Win detection logic.

use super::super::{Board, Cell, Side};
use tracing::instrument;

/// Every winning line, in scan order: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Returns the first line fully owned by `side`.
///
/// Lines are scanned rows first, then columns, then diagonals, so a board
/// completing a row and a column at once reports the row.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, side: Side) -> Option<[usize; 3]> {
    let cells = board.cells();
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| cells[i] == Cell::Taken(side)))
}

/// Returns the empty cell that would complete a line for `side`.
///
/// The first line (in scan order) holding two of `side`'s chips and one
/// empty cell decides the answer.
#[instrument(skip(board))]
pub fn completing_cell(board: &Board, side: Side) -> Option<usize> {
    let cells = board.cells();
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&i| cells[i] == Cell::Taken(side))
            .count();
        if owned != 2 {
            return None;
        }
        line.iter().copied().find(|&i| cells[i] == Cell::Empty)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(first: &[usize], second: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in first {
            board.place(i, Side::First).unwrap();
        }
        for &i in second {
            board.place(i, Side::Second).unwrap();
        }
        board
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Side::First), None);
        assert_eq!(winning_line(&board, Side::Second), None);
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[0, 1, 2], &[4, 5]);
        assert_eq!(winning_line(&board, Side::First), Some([0, 1, 2]));
        assert_eq!(winning_line(&board, Side::Second), None);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[0, 1], &[2, 4, 6]);
        assert_eq!(winning_line(&board, Side::Second), Some([2, 4, 6]));
    }

    #[test]
    fn test_row_reported_before_column() {
        // Top row and left column share cell 0.
        let board = board_with(&[0, 1, 2, 3, 6], &[]);
        assert_eq!(winning_line(&board, Side::First), Some([0, 1, 2]));
    }

    #[test]
    fn test_completing_cell_finds_gap() {
        let board = board_with(&[0, 8], &[]);
        assert_eq!(completing_cell(&board, Side::First), Some(4));
    }

    #[test]
    fn test_completing_cell_ignores_blocked_line() {
        let board = board_with(&[0, 1], &[2]);
        assert_eq!(completing_cell(&board, Side::First), None);
    }

    #[test]
    fn test_completing_cell_uses_scan_order() {
        // Both the middle row (gap at 3) and the main diagonal (gap at 8)
        // are open; the row comes first.
        let board = board_with(&[0, 4, 5], &[]);
        assert_eq!(completing_cell(&board, Side::First), Some(3));
    }
}
