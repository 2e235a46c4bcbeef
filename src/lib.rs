pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod level;
pub mod position;

pub use board::{Board, RevealOutcome};
pub use cell::Cell;
pub use error::GameError;
pub use game::{Action, Game, GameState};
pub use level::Level;
pub use position::Position;
