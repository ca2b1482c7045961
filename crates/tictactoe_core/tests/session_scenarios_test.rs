//! End-to-end game scenarios through the public session API.

use tictactoe_core::{
    Board, GameSession, MoveRejection, Outcome, Phase, Player, Position, Snapshot, Square,
};

fn started() -> GameSession {
    let mut session = GameSession::new();
    session.start();
    session
}

fn play(session: &mut GameSession, moves: &[usize]) -> Vec<Result<Outcome, MoveRejection>> {
    moves.iter().map(|&index| session.apply_move(index)).collect()
}

#[test]
fn test_top_row_win_for_x() {
    let mut session = started();
    let results = play(&mut session, &[0, 4, 1, 3, 2]);

    assert!(results[..4].iter().all(|r| *r == Ok(Outcome::InProgress)));
    assert_eq!(results[4], Ok(Outcome::Win(Player::X)));

    use Square::{Empty, Occupied};
    let (x, o) = (Occupied(Player::X), Occupied(Player::O));
    // Marks by move: X@0, O@4, X@1, O@3, X@2.
    assert_eq!(
        session.board(),
        &Board::from_squares([x, x, x, o, o, Empty, Empty, Empty, Empty])
    );
    assert_eq!(session.phase(), Phase::Terminal);
}

#[test]
fn test_full_board_draw() {
    let mut session = started();
    let moves = [0, 4, 2, 1, 3, 5, 7, 6, 8];

    for (ply, &index) in moves.iter().enumerate() {
        let expected = if ply == 8 { Outcome::Draw } else { Outcome::InProgress };
        assert_eq!(session.apply_move(index), Ok(expected));
        assert!(session.is_started(), "started dropped after ply {}", ply);
    }
    assert_eq!(session.outcome(), Outcome::Draw);
    assert!(session.is_started());
    assert_eq!(session.ply(), 9);
}

#[test]
fn test_index_order_fill_ends_on_anti_diagonal() {
    // Playing 0..=8 in order hands X the 2-4-6 diagonal on the 7th move.
    let mut session = started();
    let results = play(&mut session, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(results[6], Ok(Outcome::Win(Player::X)));
    assert_eq!(results[7], Err(MoveRejection::GameOver));
    assert_eq!(results[8], Err(MoveRejection::GameOver));
    assert_eq!(session.ply(), 7);
}

#[test]
fn test_same_square_twice() {
    let mut session = started();
    assert!(session.apply_move(0).is_ok());
    assert_eq!(
        session.apply_move(0),
        Err(MoveRejection::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(session.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(session.next_player(), Player::O);
}

#[test]
fn test_restart_after_win() {
    let mut session = started();
    play(&mut session, &[0, 4, 1, 3, 2]);
    assert_eq!(session.outcome(), Outcome::Win(Player::X));

    session.restart();

    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.next_player(), Player::X);
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.phase(), Phase::Active);
    assert!(session.apply_move(4).is_ok());
}

#[test]
fn test_terminal_session_never_mutates() {
    let mut session = started();
    play(&mut session, &[0, 4, 1, 3, 2]);
    let before = session.clone();

    for index in 0..12 {
        assert_eq!(session.apply_move(index), Err(MoveRejection::GameOver));
    }
    assert_eq!(session, before);
}

#[test]
fn test_pending_session_never_mutates() {
    let mut session = GameSession::new();
    for index in 0..12 {
        assert_eq!(session.apply_move(index), Err(MoveRejection::NotStarted));
    }
    assert_eq!(session, GameSession::new());
}

#[test]
fn test_player_toggles_only_on_accepted_moves() {
    let mut session = started();
    let mut expected = Player::X;
    for index in [4, 4, 0, 9, 0, 8, 2] {
        let accepted = session.apply_move(index).is_ok();
        if accepted {
            expected = expected.opponent();
        }
        assert_eq!(session.next_player(), expected);
    }
}

#[test]
fn test_snapshot_serializes_for_renderers() {
    let mut session = started();
    play(&mut session, &[4, 0]);

    let json = serde_json::to_string(&session.snapshot()).expect("serialize");
    let back: Snapshot = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, session.snapshot());
    assert_eq!(*back.next_player(), Player::X);
    assert_eq!(*back.phase(), Phase::Active);
}
