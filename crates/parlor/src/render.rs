//! Plain-text views of engine state.

use parlor_blackjack::Hand;
use parlor_tictactoe::{Board, Position};

/// Box-drawn board, empty squares showing their number.
pub fn board_lines(board: &Board) -> Vec<String> {
    let mut lines = vec!["┌───┬───┬───┐".to_string()];
    for (row, chunk) in Position::ALL.chunks(3).enumerate() {
        let cells: Vec<String> = chunk
            .iter()
            .map(|&pos| format!(" {} ", board.cell_label(pos)))
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
        if row < 2 {
            lines.push("├───┼───┼───┤".to_string());
        }
    }
    lines.push("└───┴───┴───┘".to_string());
    lines
}

/// `"A, 7  (18)"`.
pub fn hand_line(hand: &Hand) -> String {
    format!("{}  ({})", hand.labels(), hand.total())
}
