//! Text rendering of a session.

use crate::config::DisplayConfig;
use tictactoe_core::{ActionButton, Board, GameSession, Position, Square, StatusLine, rules};

/// Draws the board as three rows joined by `|` and separated by `-+-+-`.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| match board.get(*pos) {
                    Square::Occupied(player) => display.mark(player).to_string(),
                    Square::Empty if *display.show_indices() => pos.to_index().to_string(),
                    Square::Empty => " ".to_string(),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n-+-+-\n")
}

/// Draws the board, the status line and the available action.
pub fn render_view(session: &GameSession, display: &DisplayConfig) -> String {
    let mut out = render_board(session.board(), display);
    out.push_str("\n\n");

    let status = match StatusLine::of(session) {
        StatusLine::Turn(player) => format!("Turn: {}", display.mark(player)),
        StatusLine::Won(player) => format!("{} wins!", display.mark(player)),
        StatusLine::Draw => StatusLine::Draw.to_string(),
    };
    out.push_str(&status);

    if let Some((_, line)) = rules::winning_line(session.board()) {
        let labels: Vec<&str> = line.iter().map(|pos| pos.label()).collect();
        out.push_str(&format!(" ({})", labels.join(", ")));
    }

    out.push_str(&format!("\n[{}]", ActionButton::of(session).label()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_view() {
        let session = GameSession::new();
        let view = render_view(&session, &DisplayConfig::default());
        assert_eq!(
            view,
            "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\n\nTurn: X\n[Start New Game]"
        );
    }

    #[test]
    fn test_won_view_names_line() {
        let mut session = GameSession::new();
        session.start();
        for index in [0, 4, 1, 3, 2] {
            session.apply_move(index).expect("legal move");
        }
        let view = render_view(&session, &DisplayConfig::default());
        assert!(view.starts_with("X|X|X\n-+-+-\nO|O|5"));
        assert!(view.contains("X wins! (Top-left, Top-center, Top-right)"));
        assert!(view.ends_with("[Restart]"));
    }
}
