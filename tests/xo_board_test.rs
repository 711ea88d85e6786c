//! Tests for the board and its line rules.

use strictly_xo::{Board, Cell, GameError, Position, Side};

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    board.place(4, Side::First).unwrap();
    assert_eq!(board.get(4), Some(Cell::Taken(Side::First)));
    assert!(!board.is_empty(4));
    assert_eq!(board.empty_cells().len(), 8);
}

#[test]
fn test_place_out_of_range() {
    let mut board = Board::new();
    assert_eq!(board.place(9, Side::First), Err(GameError::OutOfRange(9)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_place_occupied() {
    let mut board = Board::new();
    board.place(0, Side::First).unwrap();
    assert_eq!(board.place(0, Side::Second), Err(GameError::CellOccupied(0)));
    assert_eq!(board.get(0), Some(Cell::Taken(Side::First)));
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::new();
    board.place(3, Side::Second).unwrap();
    board.clear(3).unwrap();
    assert!(board.is_empty(3));
    assert!(board.clear(3).is_ok());
    assert_eq!(board.clear(12), Err(GameError::OutOfRange(12)));
}

#[test]
fn test_reset_empties_board() {
    let mut board = Board::new();
    for i in [0, 4, 8] {
        board.place(i, Side::First).unwrap();
    }
    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn test_row_wins_over_column() {
    let mut board = Board::new();
    for i in [0, 1, 2, 3, 6] {
        board.place(i, Side::First).unwrap();
    }
    assert_eq!(board.winning_line(Side::First), Some([0, 1, 2]));
}

#[test]
fn test_column_wins_over_diagonal() {
    let mut board = Board::new();
    for i in [2, 5, 8, 4, 6] {
        board.place(i, Side::Second).unwrap();
    }
    assert_eq!(board.winning_line(Side::Second), Some([2, 5, 8]));
}

#[test]
fn test_line_belongs_to_one_side() {
    let mut board = Board::new();
    for i in [0, 1] {
        board.place(i, Side::First).unwrap();
    }
    board.place(2, Side::Second).unwrap();
    assert_eq!(board.winning_line(Side::First), None);
    assert_eq!(board.winning_line(Side::Second), None);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for i in 0..9 {
        assert!(!board.is_full());
        let side = if i % 2 == 0 { Side::First } else { Side::Second };
        board.place(i, side).unwrap();
    }
    assert!(board.is_full());
}

#[test]
fn test_display_numbers_empty_cells() {
    let mut board = Board::new();
    board.place(0, Side::First).unwrap();
    board.place(4, Side::Second).unwrap();
    assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}

#[test]
fn test_position_round_trip_and_groups() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(9), None);
    assert!(Position::BottomRight.is_corner());
    assert!(Position::MiddleLeft.is_edge());
    assert!(!Position::Center.is_corner() && !Position::Center.is_edge());
}

#[test]
fn test_position_parsing() {
    assert_eq!(Position::from_label_or_number("5"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("bottom left"), Some(Position::BottomLeft));
    assert_eq!(Position::from_label_or_number("TopRight"), Some(Position::TopRight));
    assert_eq!(Position::from_label_or_number("nowhere"), None);
}

#[test]
fn test_side_parsing_and_display() {
    assert_eq!("x".parse::<Side>().ok(), Some(Side::First));
    assert_eq!("O".parse::<Side>().ok(), Some(Side::Second));
    assert_eq!("second".parse::<Side>().ok(), Some(Side::Second));
    assert_eq!(Side::First.to_string(), "X");
    assert_eq!(Side::Second.opponent(), Side::First);
}
