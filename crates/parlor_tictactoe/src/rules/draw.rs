//! Draw detection.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns true iff no square is empty.
///
/// Only meaningful once [`check_win`](crate::check_win) has come back false
/// for the player who just moved: a full board with a line is a win.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, check_winner};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().apply_move(4, Player::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let moves = [
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::O),
            (4, Player::X),
            (5, Player::X),
            (6, Player::O),
            (7, Player::X),
            (8, Player::O),
        ];
        let board = moves
            .iter()
            .fold(Board::new(), |b, &(i, p)| b.apply_move(i, p).unwrap());

        assert!(check_draw(&board));
        assert_eq!(check_winner(&board), None);
    }
}
