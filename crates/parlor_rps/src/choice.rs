//! The three throws.

use parlor_core::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A throw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Choice {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Choice {
    /// All throws in menu order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The throw this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// Maps a menu number (1-3) to a throw.
    pub fn from_menu(number: u32) -> Option<Choice> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }

    /// Menu number (1-3) for this throw.
    pub fn menu_number(self) -> u32 {
        self as u32 + 1
    }
}

/// Picks a throw uniformly at random.
#[instrument(skip(rng))]
pub fn pick<R: RandomSource + ?Sized>(rng: &mut R) -> Choice {
    let roll = rng.range_inclusive(1, 3);
    let choice = Choice::from_menu(roll).unwrap_or(Choice::Rock);
    debug!(roll, %choice, "Computer picked");
    choice
}
