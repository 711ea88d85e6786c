//! Scripted sessions through the console front end.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Cursor;
use std::time::Duration;
use strictly_xo::console::{self, SessionEnd};
use strictly_xo::{EventLog, GameConfig, GameMode, RoundStatus, SeriesController, Side};

fn run_script(
    config: GameConfig,
    script: &str,
) -> (SeriesController<EventLog, SmallRng>, SessionEnd, String) {
    let mut series =
        SeriesController::new(config, EventLog::new(), SmallRng::seed_from_u64(1)).unwrap();
    let mut out = Vec::new();
    let end = console::run(&mut series, Cursor::new(script), &mut out, Duration::ZERO).unwrap();
    (series, end, String::from_utf8(out).unwrap())
}

fn pvp() -> GameConfig {
    GameConfig::default().with_first_player(Some(Side::First))
}

#[test]
fn test_win_then_next_round() {
    let (series, end, out) = run_script(pvp(), "1\n5\n2\n9\n3\nn\nq\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(series.scores().first, 5);
    assert_eq!(series.round_number(), 2);
    assert_eq!(series.round().starting_side(), Side::Second);
    assert_eq!(series.observer().round_ends(), vec![RoundStatus::Won(Side::First)]);
    assert!(out.contains("Round over. 'n' for the next round > "));
    assert!(out.contains("O > "));
}

#[test]
fn test_cell_names_are_accepted() {
    let (series, _, _) = run_script(pvp(), "center\ntop left\n");
    assert!(!series.round().board().is_empty(4));
    assert!(!series.round().board().is_empty(0));
    assert_eq!(series.round().turn(), 3);
}

#[test]
fn test_rejections_are_reported_and_session_continues() {
    let (series, end, out) = run_script(pvp(), "5\n5\nzz\n\nn\n1\n");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(out.contains("Cell 5 is taken. Try another cell."));
    assert!(out.contains("Unknown command or cell: zz"));
    assert!(out.contains("Finish the round first"));
    assert_eq!(series.round().turn(), 3);
}

#[test]
fn test_surrender_and_series_end() {
    let config = pvp().with_max_rounds(1);
    let (series, _, out) = run_script(config, "s\nn\nn\n");
    assert!(series.is_series_complete());
    assert_eq!(series.scores().second, 9);
    assert!(out.contains("Last round played."));
    assert!(out.contains("The series is over."));
}

#[test]
fn test_reset_from_console() {
    let (series, _, _) = run_script(pvp(), "s\nr\n");
    assert_eq!(series.scores().second, 0);
    assert!(series.records().is_empty());
    assert!(series.round().is_active());
}

#[test]
fn test_bot_replies_between_human_moves() {
    let config = GameConfig::default().with_mode(GameMode::PlayerVsBot);
    let (series, _, _) = run_script(config, "1\nq\n");
    let board = series.round().board();
    assert!(!board.is_empty(0));
    assert!(!board.is_empty(4));
    assert_eq!(series.round().current_side(), Side::First);
}

#[test]
fn test_show_and_help() {
    let (_, _, out) = run_script(pvp(), "b\nh\n");
    assert!(out.contains("Round 1/5 | Turn 1 | X to move"));
    assert!(out.contains(" 1 | 2 | 3"));
    assert!(out.contains("Commands:"));
}

#[test]
fn test_empty_input_ends_session() {
    let (series, end, out) = run_script(pvp(), "");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(series.round().turn(), 1);
    assert_eq!(out, "X > ");
}
