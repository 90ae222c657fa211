//! Plain-text rendering of a session.

use tictactoe::GameSession;

/// Renders the board, status line and score.
pub fn render(session: &GameSession) -> String {
    let mut out = session.board().display();
    out.push_str("\n\n");
    out.push_str(&session.status().to_string());
    if let Some(line) = session.outcome().line() {
        let cells: Vec<String> = line
            .positions()
            .iter()
            .map(|pos| pos.label().to_string())
            .collect();
        out.push_str(&format!(" ({})", cells.join(", ")));
    }
    out.push('\n');
    out.push_str(&session.score().to_string());
    out.push('\n');
    out
}
