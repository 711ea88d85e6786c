//! Tests for the heuristic bot.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use strictly_xo::bot::{Reason, choose, pick_move};
use strictly_xo::{Board, GameError, Position, RoundEngine, Side};

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
fn test_prefers_own_win_to_block() {
    // O completes column 1-4-7; X threatens column 2-5-8.
    let board = board_with(&[2, 5], &[1, 4]);
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(choose(&board, Side::Second, &mut rng), Ok((7, Reason::Win)));
}

#[test]
fn test_blocks_when_it_cannot_win() {
    let board = board_with(&[0, 4], &[1]);
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(choose(&board, Side::Second, &mut rng), Ok((8, Reason::Block)));
}

#[test]
fn test_first_threat_in_scan_order_wins() {
    // X can finish the top row at 2 and the left column at 6.
    let board = board_with(&[0, 1, 3], &[4, 8]);
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(choose(&board, Side::First, &mut rng), Ok((2, Reason::Win)));
}

#[test]
fn test_opening_reply_is_center() {
    for opening in [0, 1, 2, 3, 5, 6, 7, 8] {
        let board = board_with(&[opening], &[]);
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(pick_move(&board, Side::Second, &mut rng), Ok(4));
    }
}

#[test]
fn test_corner_choice_varies_with_rng() {
    let board = board_with(&[4], &[]);
    let picks: std::collections::HashSet<usize> = (0..64)
        .map(|seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            pick_move(&board, Side::Second, &mut rng).unwrap()
        })
        .collect();
    assert!(picks.len() > 1);
    assert!(picks.iter().all(|&i| Position::CORNERS.iter().any(|p| p.to_index() == i)));
}

#[test]
fn test_same_seed_same_move() {
    let board = board_with(&[4], &[]);
    let a = pick_move(&board, Side::Second, &mut SmallRng::seed_from_u64(42));
    let b = pick_move(&board, Side::Second, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_full_board_is_an_error() {
    let board = board_with(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(choose(&board, Side::First, &mut rng), Err(GameError::NoMoveAvailable));
}

#[test]
fn test_always_picks_an_empty_cell() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..300 {
        let mut round = RoundEngine::new(Side::First, 3);
        for _ in 0..20 {
            if !round.is_active() {
                break;
            }
            let side = round.current_side();
            let index = if side == Side::Second {
                pick_move(round.board(), side, &mut rng).unwrap()
            } else {
                *round.board().empty_cells().choose(&mut rng).unwrap()
            };
            assert!(round.board().is_empty(index));
            round.submit_move(index, side).unwrap();
        }
    }
}
