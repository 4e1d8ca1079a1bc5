//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines in scan order.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
/// Every scan over lines uses this order, which makes tie-breaks
/// deterministic.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line (in scan order) fully held by `mark`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    let held = Some(Square::Occupied(mark));
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| board.get(i) == held))
}

/// Returns the empty cell that would complete a line for `mark`.
///
/// Looks for the first line (in scan order) where two cells hold `mark`
/// and the third is empty.
#[instrument(skip(board))]
pub fn find_threat(board: &Board, mark: Mark) -> Option<usize> {
    let held = Some(Square::Occupied(mark));
    WINNING_LINES.into_iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == held).count();
        let open: Vec<usize> = line.into_iter().filter(|&i| board.is_empty(i)).collect();
        match (owned, open.as_slice()) {
            (2, [cell]) => Some(*cell),
            _ => None,
        }
    })
}
