//! Session score for rock, paper, scissors.

use crate::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Counters from the human's side (side `a` in [`resolve`](crate::resolve)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RpsScore {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl RpsScore {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score with `outcome` counted.
    #[instrument]
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        let next = match outcome {
            Outcome::AWins => Self {
                wins: self.wins + 1,
                ..self
            },
            Outcome::BWins => Self {
                losses: self.losses + 1,
                ..self
            },
            Outcome::Draw => Self {
                draws: self.draws + 1,
                ..self
            },
        };
        info!(wins = next.wins, losses = next.losses, draws = next.draws, "Score updated");
        next
    }
}

impl std::fmt::Display for RpsScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins={} Losses={} Draws={}",
            self.wins, self.losses, self.draws
        )
    }
}
