//! Play loops, one per game.
//!
//! Each loop takes the game's score by value and returns it updated when
//! the player declines another round.

mod blackjack;
mod rps;
mod tictactoe;

pub use blackjack::play_blackjack;
pub use rps::play_rps;
pub use tictactoe::play_tictactoe;

use crate::Prompter;
use anyhow::Result;

const PLAY_AGAIN: &str = "Play again? (Y/N): ";
const BACK_TO_MENU: &str = "\nPress Enter to return to the menu...";

/// Asks whether to play another round.
fn play_again<P: Prompter + ?Sized>(io: &mut P) -> Result<bool> {
    io.yes_no(PLAY_AGAIN)
}
