//! Error types for tic-tac-toe moves.

use derive_more::{Display, Error, From};

/// Reasons the engine rejects a move.
///
/// A rejected move never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game is already won or drawn.
    #[display("Game is not in progress")]
    InactiveGame,

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The index is not a board square.
    #[display("Square {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
}

/// Reasons the controller ignores a cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ControlError {
    /// No game has been started yet.
    #[display("No game in progress, choose a mode first")]
    #[from(ignore)]
    NoGame,

    /// The computer owns the current turn.
    #[display("Waiting for the computer to move")]
    #[from(ignore)]
    ComputerToMove,

    /// The engine rejected the move.
    #[display("{}", _0)]
    Move(MoveError),
}
