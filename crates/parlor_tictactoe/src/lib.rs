//! Naughts and crosses rules.
//!
//! The engine is stateless per call: [`Board::apply_move`] returns a new
//! board, and [`check_win`] / [`check_draw`] inspect one. Turn order and
//! round restarts belong to the caller.
//!
//! ```
//! use parlor_tictactoe::{Board, Player, check_win};
//!
//! let board = Board::new()
//!     .apply_move(0, Player::X)?
//!     .apply_move(4, Player::X)?
//!     .apply_move(8, Player::X)?;
//! assert!(check_win(&board, Player::X));
//! # Ok::<(), parlor_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod rules;
mod score;
mod types;

pub use action::MoveError;
pub use position::Position;
pub use rules::{LINES, check_draw, check_win, check_winner, is_full};
pub use score::{RoundResult, TicTacToeScore};
pub use types::{Board, Player, Square};

/// Alias for clarity in the play loop.
pub type Mark = Player;
