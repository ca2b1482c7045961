//! Property tests for the board evaluator over arbitrary boards.

use proptest::prelude::*;
use tictactoe_core::rules::{check_winner, LINES};
use tictactoe_core::{evaluate, Board, Outcome, Player, Square};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

/// Every full board on which no line is complete.
fn drawn_boards() -> Vec<Board> {
    (0u16..1 << 9)
        .map(|bits| {
            Board::from_squares(std::array::from_fn(|i| {
                let player = if bits & (1 << i) != 0 { Player::X } else { Player::O };
                Square::Occupied(player)
            }))
        })
        .filter(|board| check_winner(board).is_none())
        .collect()
}

#[test]
fn drawn_board_count() {
    assert_eq!(drawn_boards().len(), 32);
}

proptest! {
    #[test]
    fn completed_line_wins_for_its_owner(
        mut squares in prop::array::uniform9(square()),
        line in 0..LINES.len(),
        owner in player(),
    ) {
        for pos in LINES[line] {
            squares[pos.to_index()] = Square::Occupied(owner);
        }
        // Only the owner's lines may be complete, so the result is unambiguous.
        let board = Board::from_squares(squares.map(|sq| match sq {
            Square::Occupied(p) if p != owner => Square::Empty,
            other => other,
        }));

        prop_assert_eq!(evaluate(&board), Outcome::Win(owner));
    }

    #[test]
    fn full_board_without_line_is_draw(board in prop::sample::select(drawn_boards())) {
        prop_assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn open_board_without_line_is_in_progress(board in board()) {
        prop_assume!(board.squares().contains(&Square::Empty));
        prop_assume!(check_winner(&board).is_none());
        prop_assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn evaluate_is_deterministic(board in board()) {
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }
}
