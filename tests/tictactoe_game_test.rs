//! Tests for move application, win and draw detection.

use tictactoe_duel::{
    Board, GameEngine, GameSession, GameStatus, Mark, Mode, MoveError, Square, rules,
};

fn start() -> GameSession {
    GameEngine::new().start_game(Mode::HumanVsHuman)
}

fn play(moves: &[usize]) -> GameSession {
    moves.iter().fold(start(), |session, &index| {
        session.apply_move(index).expect("legal move")
    })
}

#[test]
fn test_top_row_win_scenario() {
    let session = play(&[0, 4, 1, 5, 2]);
    assert_eq!(
        *session.status(),
        GameStatus::Won {
            winner: Mark::X,
            line: [0, 1, 2]
        }
    );
    // The winner keeps the turn marker; nobody moves after a win.
    assert_eq!(*session.current_player(), Mark::X);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(*session.status(), GameStatus::Draw);
}

#[test]
fn test_draw_board_evaluates_to_draw() {
    // X O X / O X O / O X O
    let x = Square::Occupied(Mark::X);
    let o = Square::Occupied(Mark::O);
    let board = Board::from_squares([x, o, x, o, x, o, o, x, o]);
    assert_eq!(rules::evaluate(&board, Mark::O), GameStatus::Draw);
    assert_eq!(rules::evaluate(&board, Mark::X), GameStatus::Draw);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X fills the board and completes the left column with its fifth mark.
    let session = play(&[0, 1, 3, 4, 5, 2, 7, 8, 6]);
    assert_eq!(
        *session.status(),
        GameStatus::Won {
            winner: Mark::X,
            line: [0, 3, 6]
        }
    );
}

#[test]
fn test_every_winning_line_is_detected() {
    for line in rules::WINNING_LINES {
        // X takes the line, O answers on squares off it.
        let mut others = (0..9).filter(|i| !line.contains(i));
        let mut moves = Vec::new();
        for &x in &line {
            moves.push(x);
            if moves.len() < 5 {
                moves.push(others.next().expect("six squares off the line"));
            }
        }

        let mut session = start();
        for index in moves {
            session = session.apply_move(index).expect("legal move");
        }

        assert_eq!(
            *session.status(),
            GameStatus::Won {
                winner: Mark::X,
                line
            },
            "line {:?}",
            line
        );
    }
}

#[test]
fn test_moves_alternate_starting_with_x() {
    let moves = [4, 0, 8, 2, 1, 7, 6];
    let mut session = start();
    for (n, &index) in moves.iter().enumerate() {
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(*session.current_player(), expected);
        session = session.apply_move(index).expect("legal move");
        assert_eq!(session.board().get(index), Some(Square::Occupied(expected)));
        assert_eq!(session.board().filled_count(), n + 1);
    }
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let session = play(&[4]);
    assert_eq!(session.apply_move(4), Err(MoveError::CellOccupied(4)));
    assert_eq!(session, play(&[4]));
}

#[test]
fn test_out_of_range_rejected() {
    let session = start();
    assert_eq!(session.apply_move(9), Err(MoveError::OutOfRange(9)));
    assert_eq!(session.apply_move(usize::MAX), Err(MoveError::OutOfRange(usize::MAX)));
}

#[test]
fn test_finished_game_rejects_moves() {
    let won = play(&[0, 4, 1, 5, 2]);
    assert_eq!(won.apply_move(8), Err(MoveError::InactiveGame));
    // Inactive is reported even for squares that are taken or off the board.
    assert_eq!(won.apply_move(0), Err(MoveError::InactiveGame));
    assert_eq!(won.apply_move(42), Err(MoveError::InactiveGame));
    assert_eq!(won.board().filled_count(), 5);
}

#[test]
fn test_new_game_replaces_old_session() {
    let mut engine = GameEngine::new();
    let old = engine.start_game(Mode::HumanVsHuman).apply_move(0).unwrap();
    let new = engine.start_game(Mode::HumanVsComputer);
    assert_eq!(new.board().filled_count(), 0);
    assert_eq!(*new.mode(), Mode::HumanVsComputer);
    assert_ne!(old.generation(), new.generation());
}
