//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from session
//! bookkeeping so the engine and the computer opponent share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, find_threat, winning_line};

use super::{Board, GameStatus, Mark};
use tracing::instrument;

/// Status of `board` right after `mover` placed a mark.
///
/// A completed line for `mover` wins, else a full board is a draw, else the
/// game goes on. Only the mover can have just completed a line, so the
/// other mark is not checked.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Mark) -> GameStatus {
    if let Some(line) = winning_line(board, mover) {
        GameStatus::Won {
            winner: mover,
            line,
        }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
