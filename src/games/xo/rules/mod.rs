//! Game rules for limited-chip tic-tac-toe.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, completing_cell, winning_line};
