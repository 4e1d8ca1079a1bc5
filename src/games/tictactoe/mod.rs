//! Tic-tac-toe: rules, sessions, the computer opponent and the controller
//! front ends drive.

mod computer;
mod controller;
mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use computer::compute_computer_move;
pub use controller::{ComputerTurn, GameController};
pub use error::{ControlError, MoveError};
pub use game::{GameEngine, GameSession};
pub use position::Position;
pub use types::{BOARD_SIZE, Board, GameStatus, Mark, Mode, Square};
