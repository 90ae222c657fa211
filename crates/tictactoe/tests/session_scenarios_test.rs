//! Tests for session move handling, scoring and resets.

use tictactoe::{GameSession, Mark, Outcome, Phase, Score, Square, Status};

fn play_all(session: &mut GameSession, moves: &[usize]) {
    for &index in moves {
        session.play_move(index);
    }
}

/// X wins the top row: X0, O3, X1, O4, X2.
const X_TOP_ROW: [usize; 5] = [0, 3, 1, 4, 2];

/// Fills the board as X O X / X O O / O X X with no line completed.
const DRAW_GAME: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

#[test]
fn test_top_row_win() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_TOP_ROW);

    match session.outcome() {
        Outcome::Win { mark, line } => {
            assert_eq!(mark, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected X win, got {:?}", other),
    }
    assert_eq!(*session.score(), Score::new(1, 0, 0));
}

#[test]
fn test_full_board_draw() {
    let mut session = GameSession::new();
    play_all(&mut session, &DRAW_GAME);

    let cells: Vec<_> = session.board().squares().iter().map(|s| s.mark()).collect();
    let (x, o) = (Some(Mark::X), Some(Mark::O));
    assert_eq!(cells, vec![x, o, x, x, o, o, o, x, x]);
    assert_eq!(session.outcome(), Outcome::Draw);
    assert_eq!(session.outcome().winner(), None);
    assert_eq!(session.phase(), Phase::Drawn);
    assert_eq!(session.status(), Status::Draw);
    assert_eq!(session.status().to_string(), "It's a draw.");
    assert_eq!(*session.score(), Score::new(0, 0, 1));
}

#[test]
fn test_win_on_last_square_counts_as_win() {
    let mut session = GameSession::new();
    // X completes the down-right diagonal with the ninth mark.
    play_all(&mut session, &[0, 1, 2, 3, 7, 5, 4, 6, 8]);

    assert!(session.board().empty_positions().is_empty());
    assert_eq!(session.phase(), Phase::Won(Mark::X));
    assert_eq!(session.outcome().line().map(|l| l.indices()), Some([0, 4, 8]));
    assert_eq!(session.status().to_string(), "Winner: X");
    assert_eq!(*session.score(), Score::new(1, 0, 0));
}

#[test]
fn test_repeat_move_is_ignored() {
    let mut session = GameSession::new();
    session.play_move(0);
    let before = session.clone();

    session.play_move(0);

    assert_eq!(session, before);
    assert_eq!(session.board().get(tictactoe::Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(session.to_move(), Mark::O);
}

#[test]
fn test_out_of_range_move_is_ignored() {
    let mut session = GameSession::new();
    session.play_move(9);
    session.play_move(usize::MAX);
    assert_eq!(session, GameSession::new());
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_TOP_ROW);
    let finished = session.clone();

    play_all(&mut session, &[5, 6, 7, 8]);

    assert_eq!(session, finished);
    assert_eq!(*session.score().x_wins(), 1);
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut session = GameSession::new();
    play_all(&mut session, &DRAW_GAME);
    let finished = session.clone();

    session.play_move(4);

    assert_eq!(session, finished);
    assert_eq!(*session.score().draws(), 1);
}

#[test]
fn test_reset_round_keeps_score() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_TOP_ROW);

    session.reset_round();

    assert_eq!(session.board().empty_positions().len(), 9);
    assert_eq!(session.to_move(), Mark::X);
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(*session.score(), Score::new(1, 0, 0));
}

#[test]
fn test_reset_round_mid_game_restores_x() {
    let mut session = GameSession::new();
    session.play_move(4);
    assert_eq!(session.to_move(), Mark::O);

    session.reset_round();

    assert_eq!(session.to_move(), Mark::X);
    assert!(session.is_playable(4));
}

#[test]
fn test_reset_all_zeroes_score() {
    let mut session = GameSession::new();
    play_all(&mut session, &X_TOP_ROW);
    session.reset_round();
    play_all(&mut session, &DRAW_GAME);

    session.reset_all();

    assert_eq!(session, GameSession::new());
    assert_eq!(*session.score(), Score::default());
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut session = GameSession::new();

    play_all(&mut session, &X_TOP_ROW);
    session.reset_round();
    // O takes the middle column: X0, O1, X2, O4, X3, O7.
    play_all(&mut session, &[0, 1, 2, 4, 3, 7]);
    assert_eq!(session.phase(), Phase::Won(Mark::O));
    session.reset_round();
    play_all(&mut session, &DRAW_GAME);

    assert_eq!(*session.score(), Score::new(1, 1, 1));
    assert_eq!(session.score().rounds(), 3);
}

#[test]
fn test_try_play_move_reports_outcome() {
    let mut session = GameSession::new();
    assert_eq!(session.try_play_move(4), Ok(Outcome::NoResult));
    assert!(session.try_play_move(4).is_err());
}
