//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here stores a
//! winner; callers recompute it from whatever board they display.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, Line, check_winner, winning_line};
