//! Game rules for naughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the play loop can compose them in whatever order it
//! needs.

mod draw;
mod win;

pub use draw::{check_draw, is_full};
pub use win::{LINES, check_win, check_winner};
