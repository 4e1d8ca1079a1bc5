//! Presentation-facing controller for tic-tac-toe.
//!
//! Front ends forward user actions here and read back the session to draw
//! it. The controller owns the single live session, decides when the
//! computer has to answer, and throws away computer turns that were
//! scheduled for a session that no longer exists.

use super::computer::compute_computer_move;
use super::error::ControlError;
use super::game::{GameEngine, GameSession};
use super::types::{GameStatus, Mark, Mode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A computer reply owed to the session with the given generation.
///
/// Front ends that delay the reply hold on to this token and hand it back
/// through [`GameController::play_computer_turn`] when the delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerTurn {
    /// Generation of the session the reply belongs to.
    pub generation: u64,
}

/// Owns the live game and applies user actions to it.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    engine: GameEngine,
    session: Option<GameSession>,
}

impl GameController {
    /// Creates a controller with no game started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live session, if a game has been started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Starts a new game in `mode`, replacing any existing one.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: Mode) -> &GameSession {
        self.session.insert(self.engine.start_game(mode))
    }

    /// Starts over in the current mode.
    ///
    /// Ignored unless a game is active or at least one square is filled,
    /// so an idle controller stays idle. Returns whether a new game began.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> bool {
        let mode = match self.session {
            Some(session) if session.is_active() || session.board().filled_count() > 0 => {
                *session.mode()
            }
            _ => {
                debug!("Restart ignored, nothing to restart");
                return false;
            }
        };
        self.start(mode);
        true
    }

    /// Applies a human selection of square `index`.
    ///
    /// On success returns the computer turn to schedule, if the computer
    /// now has to answer.
    ///
    /// # Errors
    ///
    /// [`ControlError::NoGame`] before the first game,
    /// [`ControlError::ComputerToMove`] while the computer owns the turn,
    /// otherwise whatever the engine rejects the move with.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<Option<ComputerTurn>, ControlError> {
        let session = self.session.as_mut().ok_or(ControlError::NoGame)?;
        if session.is_computer_turn() {
            return Err(ControlError::ComputerToMove);
        }

        *session = session.apply_move(index)?;

        if session.is_computer_turn() {
            debug!(generation = session.generation(), "Computer reply due");
            Ok(Some(ComputerTurn {
                generation: *session.generation(),
            }))
        } else {
            Ok(None)
        }
    }

    /// Plays a previously scheduled computer turn.
    ///
    /// The turn is dropped when the live session is not the one it was
    /// scheduled for, or when that session no longer expects a computer
    /// move. Returns the square the computer took.
    #[instrument(skip(self, rng))]
    pub fn play_computer_turn<R: Rng + ?Sized>(
        &mut self,
        turn: ComputerTurn,
        rng: &mut R,
    ) -> Option<usize> {
        let session = self.session.as_mut()?;
        if *session.generation() != turn.generation {
            debug!(live = session.generation(), "Discarding stale computer turn");
            return None;
        }
        if !session.is_computer_turn() {
            debug!("Discarding computer turn, not the computer's move");
            return None;
        }

        let index = compute_computer_move(session, rng)?;
        match session.apply_move(index) {
            Ok(next) => {
                info!(index, "Computer moved");
                *session = next;
                Some(index)
            }
            Err(e) => {
                debug!(error = %e, "Computer move rejected");
                None
            }
        }
    }

    /// Headline for the status bar.
    pub fn status_line(&self) -> String {
        match self.session.map(|s| *s.status()) {
            None => "Choose a game mode to start".to_string(),
            Some(GameStatus::InProgress) => "Game in progress".to_string(),
            Some(GameStatus::Won { winner, .. }) => format!("Player {} wins!", winner),
            Some(GameStatus::Draw) => "Game ended in a draw!".to_string(),
        }
    }

    /// Whose turn it is, or an empty string once the game is over.
    pub fn turn_line(&self) -> String {
        match self.session {
            Some(session) if session.is_computer_turn() => "Computer is thinking...".to_string(),
            Some(session) if session.is_active() => {
                format!("Player {}'s turn", session.current_player())
            }
            _ => String::new(),
        }
    }

    /// Squares of the winning line, if the game was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.session.map(|s| *s.status()) {
            Some(GameStatus::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Winner of the live game, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.session.map(|s| *s.status()) {
            Some(GameStatus::Won { winner, .. }) => Some(winner),
            _ => None,
        }
    }
}
