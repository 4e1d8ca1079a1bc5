//! Headless play: run a fixed list of human moves through the controller.

use crate::games::tictactoe::{ControlError, GameController, GameSession, Mode};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{info, instrument, warn};

/// Why a scripted game stopped early.
#[derive(Debug, Clone, Display, Error)]
#[display("Move {} (square {}) rejected: {}", step, index, reason)]
pub struct ScriptError {
    /// Zero-based position of the offending move in the script.
    pub step: usize,
    /// Square the move targeted.
    pub index: usize,
    /// Why the controller refused it.
    #[error(source)]
    pub reason: ControlError,
}

/// Plays `moves` as the human side(s) of a fresh game in `mode`.
///
/// In [`Mode::HumanVsComputer`] the computer answers each human move
/// immediately. Moves left over after the game ends are rejected.
///
/// # Errors
///
/// Returns the first move the controller refused.
#[instrument(skip(moves, rng), fields(moves = moves.len()))]
pub fn run_script<R: Rng + ?Sized>(
    mode: Mode,
    moves: &[usize],
    rng: &mut R,
) -> Result<GameSession, ScriptError> {
    let mut controller = GameController::new();
    let mut session = *controller.start(mode);

    for (step, &index) in moves.iter().enumerate() {
        let turn = controller.select_cell(index).map_err(|reason| {
            warn!(step, index, %reason, "Scripted move rejected");
            ScriptError {
                step,
                index,
                reason,
            }
        })?;
        if let Some(turn) = turn {
            controller.play_computer_turn(turn, rng);
        }
        if let Some(live) = controller.session() {
            session = *live;
        }
    }

    info!(status = %controller.status_line(), "Script finished");
    Ok(session)
}
