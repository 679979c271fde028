//! Move rejection.

use super::Position;

/// Error returned when a move cannot be applied.
///
/// Neither case is fatal: the caller asks the same player again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Invalid move: square index {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Invalid move: {} is already taken", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}
