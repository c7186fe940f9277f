//! Strictly Tic-Tac-Toe library - tic-tac-toe with time travel
//!
//! The game is a pure value: every click produces a new state, so the
//! history variant can keep each board snapshot and jump between them.
//!
//! # Architecture
//!
//! - **Games**: board, win/tie rules, the classic and time-travel controllers
//! - **Config**: optional TOML settings for a play session
//! - **TUI**: ratatui host that renders the board and routes clicks back
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Player, Position, Status, TimeTravelGame};
//!
//! let game = TimeTravelGame::replay(&[
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::BottomRight,
//!     Position::TopRight,
//!     Position::BottomLeft,
//! ]);
//! assert_eq!(game.status(), Status::NextPlayer(Player::O));
//!
//! // Go back two moves and play somewhere else.
//! let game = game.jump_to(3).unwrap().click(Position::MiddleLeft);
//! assert_eq!(game.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AnyGame, Board, ClassicGame, GameVariant, JumpError, Move, MoveEntry, MoveError,
    MoveOrder, Player, Position, Square, StateError, Status, TimeTravelGame, invariants,
    rules,
};

// Crate-level exports - Terminal UI
pub use tui::ui::{BoardLayout, GameLayout, render};
pub use tui::{App, run_tui};
