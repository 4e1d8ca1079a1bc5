//! Terminal tic-tac-toe with a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Engine**: sessions as values, move validation, win/draw detection
//! - **Computer**: single-ply win/block/random heuristic playing O
//! - **Controller**: the live session, restart guard, delayed computer turns
//! - **Script**: headless replay of a move list
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameController, GameStatus, Mark, Mode};
//!
//! let mut controller = GameController::new();
//! controller.start(Mode::HumanVsHuman);
//! for index in [0, 4, 1, 5, 2] {
//!     controller.select_cell(index).unwrap();
//! }
//! assert_eq!(
//!     controller.session().map(|s| *s.status()),
//!     Some(GameStatus::Won { winner: Mark::X, line: [0, 1, 2] }),
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod script;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Headless play
pub use script::{ScriptError, run_script};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, ComputerTurn, ControlError, GameController, GameEngine, GameSession,
    GameStatus, Mark, Mode, MoveError, Position, Square, compute_computer_move, rules,
};
