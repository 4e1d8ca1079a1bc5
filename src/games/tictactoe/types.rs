//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (played by the computer when there is one).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Who sits across the board from the first human player.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mode {
    /// Two humans sharing the keyboard.
    #[default]
    #[display("Player vs Player")]
    HumanVsHuman,
    /// A human playing X against the computer playing O.
    #[display("Player vs Computer")]
    HumanVsComputer,
}

impl Mode {
    /// Mark played by the computer in this mode, if any.
    pub fn computer_mark(self) -> Option<Mark> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsComputer => Some(Mark::O),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major squares.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places a mark, returning `false` when the index is off the board.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.squares.get_mut(index) {
            Some(square) => {
                *square = Square::Occupied(mark);
                true
            }
            None => false,
        }
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of occupied squares.
    pub fn filled_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the output doubles as a
    /// move legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => result.push_str(&(index + 1).to_string()),
                    Square::Occupied(mark) => result.push_str(&mark.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win along `line`.
    Won {
        /// Mark that completed the line.
        winner: Mark,
        /// Board indices of the completed line.
        line: [usize; 3],
    },
    /// Board filled with no line completed.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
