//! Single-ply heuristic opponent.
//!
//! Priority: complete a line of its own, else block the opponent's line,
//! else pick a random empty square. It never looks further ahead, so a
//! double threat beats it.

use super::game::GameSession;
use super::rules;
use super::types::Mark;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Chooses O's next square on the session's board.
///
/// Returns `None` only when the board has no empty square. Turn ownership
/// is the caller's concern: the move is computed for O regardless of whose
/// turn the session says it is.
#[instrument(skip(session, rng), fields(generation = session.generation()))]
pub fn compute_computer_move<R: Rng + ?Sized>(session: &GameSession, rng: &mut R) -> Option<usize> {
    let board = session.board();
    let me = Mark::O;

    if let Some(index) = rules::find_threat(board, me) {
        debug!(index, "Taking the win");
        return Some(index);
    }

    if let Some(index) = rules::find_threat(board, me.opponent()) {
        debug!(index, "Blocking");
        return Some(index);
    }

    let choice = board.empty_indices().choose(rng).copied();
    debug!(index = ?choice, "Random square");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameEngine, Mode};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(moves: &[usize]) -> GameSession {
        let mut session = GameEngine::new().start_game(Mode::HumanVsComputer);
        for &index in moves {
            session = session.apply_move(index).unwrap();
        }
        session
    }

    #[test]
    fn test_random_move_lands_on_empty_square() {
        let session = play(&[4]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let index = compute_computer_move(&session, &mut rng).unwrap();
            assert!(session.board().is_empty(index));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        // X O X / X O O / O X X, drawn.
        let session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(compute_computer_move(&session, &mut rng), None);
    }
}
