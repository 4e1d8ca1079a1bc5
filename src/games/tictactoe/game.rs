//! Session state and move application for tic-tac-toe.

use super::error::MoveError;
use super::rules;
use super::types::{BOARD_SIZE, Board, GameStatus, Mark, Mode};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single game from first move to win or draw.
///
/// Sessions are values. Applying a move borrows the session and returns a
/// new one, so a rejected move cannot leave a half-updated board behind.
/// A new game always gets a new session; sessions are never reset in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Mark to move next.
    current_player: Mark,
    /// Game status.
    status: GameStatus,
    /// Who is playing.
    mode: Mode,
    /// Identifier of this session, unique per engine.
    generation: u64,
}

impl GameSession {
    fn fresh(mode: Mode, generation: u64) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            mode,
            generation,
        }
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// True when the computer owns the current turn.
    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.mode.computer_mark() == Some(self.current_player)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Checks, in order: the game is in progress, the index is on the board,
    /// the square is empty. After placing, the first completed line in scan
    /// order wins; otherwise a full board is a draw; otherwise the turn
    /// passes to the other mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching `self` when the move is illegal.
    #[instrument(skip(self), fields(generation = self.generation, player = %self.current_player))]
    pub fn apply_move(&self, index: usize) -> Result<Self, MoveError> {
        if !self.is_active() {
            return Err(MoveError::InactiveGame);
        }
        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let mut next = *self;
        let mover = self.current_player;
        if !next.board.place(index, mover) {
            return Err(MoveError::OutOfRange(index));
        }
        debug!(index, "Mark placed");

        next.status = rules::evaluate(&next.board, mover);
        match next.status {
            GameStatus::InProgress => next.current_player = mover.opponent(),
            GameStatus::Won { line, .. } => info!(winner = %mover, ?line, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }

        Ok(next)
    }
}

/// Issues game sessions.
///
/// The engine remembers only the last generation it handed out; the live
/// session is owned by whoever called [`GameEngine::start_game`].
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    last_generation: u64,
}

impl GameEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game: empty board, X to move, in progress.
    ///
    /// Every call yields a session with a higher generation than the last.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, mode: Mode) -> GameSession {
        self.last_generation += 1;
        info!(generation = self.last_generation, %mode, "Starting new game");
        GameSession::fresh(mode, self.last_generation)
    }
}
