//! Tests for tic-tac-toe position enum.

use tictactoe_duel::{GameEngine, Mode, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_from_key_is_one_based() {
    assert_eq!(Position::from_key('1'), Some(Position::TopLeft));
    assert_eq!(Position::from_key('9'), Some(Position::BottomRight));
    assert_eq!(Position::from_key('0'), None);
    assert_eq!(Position::from_key('x'), None);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let session = GameEngine::new()
        .start_game(Mode::HumanVsHuman)
        .apply_move(0)
        .unwrap()
        .apply_move(4)
        .unwrap();

    let valid = Position::valid_moves(session.board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
