//! Session score for blackjack.

use crate::RoundOutcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Win/loss/push counters for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BlackjackScore {
    wins: u32,
    losses: u32,
    pushes: u32,
}

impl BlackjackScore {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score with `outcome` counted.
    #[instrument]
    #[must_use]
    pub fn record(self, outcome: RoundOutcome) -> Self {
        let next = match outcome {
            RoundOutcome::PlayerWin => Self {
                wins: self.wins + 1,
                ..self
            },
            RoundOutcome::PlayerLoss => Self {
                losses: self.losses + 1,
                ..self
            },
            RoundOutcome::Push => Self {
                pushes: self.pushes + 1,
                ..self
            },
        };
        info!(wins = next.wins, losses = next.losses, pushes = next.pushes, "Score updated");
        next
    }
}

impl std::fmt::Display for BlackjackScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins={} Losses={} Pushes={}",
            self.wins, self.losses, self.pushes
        )
    }
}
