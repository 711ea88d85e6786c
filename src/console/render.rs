//! Snapshot renderers for the console front end.

use crate::games::xo::{Cell, GameEvent, GameObserver, RoundStatus, SeriesResult, Snapshot};
use std::io::Write;
use tracing::warn;

/// Draws the board as text.
///
/// Empty cells show their 1-based number. A side's oldest chip is drawn in
/// lower case once the side is at capacity, since it is the one the side's
/// next placement removes.
pub fn board_text(snapshot: &Snapshot) -> String {
    let symbol = |index: usize| -> String {
        match snapshot.cells[index] {
            Cell::Empty => (index + 1).to_string(),
            Cell::Taken(side) => {
                let view = &snapshot.chips[side.slot()];
                if view.oldest == Some(index) {
                    side.symbol().to_ascii_lowercase().to_string()
                } else {
                    side.symbol().to_string()
                }
            }
        }
    };

    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3).map(|col| symbol(row * 3 + col)).collect();
        out.push_str(&format!(" {} | {} | {}\n", cells[0], cells[1], cells[2]));
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

/// One-line header: round, turn, side to move and scores.
pub fn status_line(snapshot: &Snapshot) -> String {
    let scores = format!("X {} - O {}", snapshot.scores.first, snapshot.scores.second);
    if snapshot.round > snapshot.max_rounds {
        return format!("Series over | {}", scores);
    }
    let state = match snapshot.status {
        RoundStatus::InProgress => format!("{} to move", snapshot.current_side),
        other => other.to_string(),
    };
    format!(
        "Round {}/{} | Turn {} | {} | {}",
        snapshot.round, snapshot.max_rounds, snapshot.turn, state, scores
    )
}

/// Human-readable renderer.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write> GameObserver for TextRenderer<W> {
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        let mut text = String::new();
        if let Some(evicted) = snapshot.last_evicted
            && snapshot.status == RoundStatus::InProgress
        {
            text.push_str(&format!("(chip on {} removed)\n", evicted + 1));
        }
        text.push_str(&status_line(snapshot));
        text.push('\n');
        text.push_str(&board_text(snapshot));
        self.emit(&text);
    }

    fn on_round_end(&mut self, status: &RoundStatus, winning_line: Option<[usize; 3]>) {
        let text = match winning_line {
            Some([a, b, c]) => format!("{} with {}-{}-{}!", status, a + 1, b + 1, c + 1),
            None => format!("{}!", status),
        };
        self.emit(&text);
    }

    fn on_series_end(&mut self, result: &SeriesResult) {
        self.emit(&format!("*** {} ***", result));
    }
}

/// Machine-readable renderer: one JSON object per notification.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, event: &GameEvent) {
        let written = serde_json::to_string(event)
            .map_err(std::io::Error::other)
            .and_then(|line| writeln!(self.out, "{}", line));
        if let Err(e) = written {
            warn!(error = %e, "Failed to write event");
        }
    }
}

impl<W: Write> GameObserver for JsonRenderer<W> {
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        self.emit(&GameEvent::StateChanged {
            snapshot: Box::new(snapshot.clone()),
        });
    }

    fn on_round_end(&mut self, status: &RoundStatus, winning_line: Option<[usize; 3]>) {
        self.emit(&GameEvent::RoundEnded {
            status: *status,
            winning_line,
        });
    }

    fn on_series_end(&mut self, result: &SeriesResult) {
        self.emit(&GameEvent::SeriesEnded { result: *result });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::games::xo::{SeriesController, Side};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn series() -> SeriesController<(), SmallRng> {
        let config = GameConfig::default().with_first_player(Some(Side::First));
        SeriesController::new(config, (), SmallRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn test_empty_board_shows_numbers() {
        let text = board_text(&series().snapshot());
        assert!(text.starts_with(" 1 | 2 | 3\n"));
        assert!(text.ends_with(" 7 | 8 | 9\n"));
    }

    #[test]
    fn test_oldest_chip_lowercase_at_capacity() {
        let mut series = series();
        for (index, side) in [
            (0, Side::First),
            (4, Side::Second),
            (1, Side::First),
            (8, Side::Second),
            (5, Side::First),
        ] {
            series.submit_move(index, side).unwrap();
        }
        let text = board_text(&series.snapshot());
        assert!(text.starts_with(" x | X | 3\n"));
        assert!(text.contains(" 4 | O | X\n"));
    }

    #[test]
    fn test_status_line() {
        let line = status_line(&series().snapshot());
        assert_eq!(line, "Round 1/5 | Turn 1 | X to move | X 0 - O 0");
    }

    #[test]
    fn test_json_renderer_writes_one_line_per_event() {
        let mut buf = Vec::new();
        {
            let mut renderer = JsonRenderer::new(&mut buf);
            renderer.on_series_end(&SeriesResult::Tie);
            renderer.on_round_end(&RoundStatus::Draw, None);
        }
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"event\":\"series_ended\""));
        assert!(lines[1].contains("\"event\":\"round_ended\""));
    }
}
