//! Core domain types for naughts and crosses.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 board.
///
/// Squares only ever go from empty to occupied through [`Board::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `mark` at board index `index` (0-8), returning the new board.
    ///
    /// The receiver is left untouched, so a rejected move costs the caller
    /// nothing but a retry.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if `index` is past the last square,
    /// [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize, mark: Player) -> Result<Board, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = *self;
        next.squares[index] = Square::Occupied(mark);
        Ok(next)
    }

    /// Label shown for a square: the mark, or its 1-based number when empty.
    pub fn cell_label(&self, pos: Position) -> String {
        match self.get(pos) {
            Square::Empty => pos.number().to_string(),
            Square::Occupied(player) => player.to_string(),
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, chunk) in Position::ALL.chunks(3).enumerate() {
            let cells: Vec<String> = chunk.iter().map(|&pos| self.cell_label(pos)).collect();
            result.push_str(&cells.join("|"));
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_square() {
        let board = Board::new();
        let next = board.apply_move(4, Player::X).unwrap();
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        // Original board untouched
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.apply_move(9, Player::X), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = Board::new().apply_move(0, Player::O).unwrap();
        assert_eq!(
            board.apply_move(0, Player::X),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        // Occupied square keeps the original mark
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_cell_labels() {
        let board = Board::new().apply_move(2, Player::O).unwrap();
        assert_eq!(board.cell_label(Position::TopLeft), "1");
        assert_eq!(board.cell_label(Position::TopRight), "O");
        assert_eq!(board.cell_label(Position::BottomRight), "9");
    }

    #[test]
    fn test_display() {
        let board = Board::new().apply_move(4, Player::X).unwrap();
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
