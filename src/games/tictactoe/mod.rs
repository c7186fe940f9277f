mod action;
mod classic;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;
mod wrapper;

pub use action::{JumpError, Move, MoveError, StateError};
pub use classic::ClassicGame;
pub use history::{MoveEntry, MoveOrder, TimeTravelGame};
pub use position::Position;
pub use status::Status;
pub use types::{Board, Player, Square};
pub use wrapper::{AnyGame, GameVariant};
