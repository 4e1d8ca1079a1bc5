//! Tests for the heuristic computer opponent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_duel::{GameEngine, GameSession, Mode, compute_computer_move};

fn play(moves: &[usize]) -> GameSession {
    moves.iter().fold(
        GameEngine::new().start_game(Mode::HumanVsComputer),
        |session, &index| session.apply_move(index).expect("legal move"),
    )
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_takes_win_over_block() {
    // O O . / X X . / . . .  with O to move: 2 wins, 5 only blocks.
    let session = play(&[3, 0, 4, 1]);
    assert_eq!(compute_computer_move(&session, &mut rng()), Some(2));
}

#[test]
fn test_blocks_when_no_win() {
    // X X . / . O . / . . .  with O to move.
    let session = play(&[0, 4, 1]);
    assert_eq!(compute_computer_move(&session, &mut rng()), Some(2));
}

#[test]
fn test_blocks_first_threat_in_scan_order() {
    // X . O / X X . / . O .  X threatens 5 (middle row), 6 (left column)
    // and 8 (diagonal); the middle row is scanned first.
    let session = play(&[0, 7, 3, 2, 4]);
    assert_eq!(compute_computer_move(&session, &mut rng()), Some(5));
}

#[test]
fn test_win_found_anywhere_in_line() {
    // O takes the gap in the middle of the left column.
    // O . X / . X . / O . X  with O to move wins at 3.
    let session = play(&[2, 0, 4, 6, 8]);
    assert_eq!(compute_computer_move(&session, &mut rng()), Some(3));
}

#[test]
fn test_random_move_is_uniform_over_empty_squares() {
    let session = play(&[4]);
    let mut rng = rng();
    let mut seen = [0usize; 9];
    for _ in 0..2000 {
        let index = compute_computer_move(&session, &mut rng).expect("empty squares left");
        seen[index] += 1;
    }

    assert_eq!(seen[4], 0);
    for (index, &count) in seen.iter().enumerate() {
        if index != 4 {
            // 2000 / 8 = 250 expected per square.
            assert!(count > 150, "square {} picked {} times", index, count);
        }
    }
}

#[test]
fn test_same_seed_same_choice() {
    let session = play(&[0]);
    let a = compute_computer_move(&session, &mut StdRng::seed_from_u64(9));
    let b = compute_computer_move(&session, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}
