//! Application state and key handling.

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tictactoe_duel::{ComputerTurn, GameController, Mode, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// Main application state.
pub struct App {
    controller: GameController,
    cursor: Position,
    computer_delay: Duration,
    turn_tx: mpsc::UnboundedSender<ComputerTurn>,
    rng: StdRng,
}

impl App {
    /// Creates an idle application; no game runs until a mode is chosen.
    ///
    /// Delayed computer turns are delivered on `turn_tx`.
    pub fn new(computer_delay: Duration, turn_tx: mpsc::UnboundedSender<ComputerTurn>) -> Self {
        Self {
            controller: GameController::new(),
            cursor: Position::Center,
            computer_delay,
            turn_tx,
            rng: StdRng::from_entropy(),
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Starts a new game in `mode`.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: Mode) {
        self.controller.start(mode);
        self.cursor = Position::Center;
    }

    /// Handles a key press. Returns `false` when the user asked to quit.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return false;
            }
            KeyCode::Char('p') => self.start(Mode::HumanVsHuman),
            KeyCode::Char('c') => self.start(Mode::HumanVsComputer),
            KeyCode::Char('r') => {
                if self.controller.restart() {
                    self.cursor = Position::Center;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = Position::from_key(c) {
                    self.cursor = pos;
                    self.select(pos);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
        true
    }

    /// Plays a computer turn whose delay has elapsed.
    #[instrument(skip(self))]
    pub fn on_computer_turn(&mut self, turn: ComputerTurn) {
        if let Some(index) = self.controller.play_computer_turn(turn, &mut self.rng) {
            debug!(index, "Computer turn applied");
        }
    }

    fn select(&mut self, pos: Position) {
        match self.controller.select_cell(pos.to_index()) {
            Ok(Some(turn)) => self.schedule(turn),
            Ok(None) => {}
            // Rejected selections leave the board as it was.
            Err(e) => debug!(error = %e, position = %pos, "Selection ignored"),
        }
    }

    fn schedule(&self, turn: ComputerTurn) {
        let tx = self.turn_tx.clone();
        let delay = self.computer_delay;
        debug!(generation = turn.generation, ?delay, "Scheduling computer turn");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI has shut down.
            let _ = tx.send(turn);
        });
    }
}
