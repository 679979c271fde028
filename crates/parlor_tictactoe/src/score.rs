//! Session score for naughts and crosses.

use crate::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// The player completed a line.
    Won(Player),
    /// The board filled with no line.
    Draw,
}

/// Win/draw counters for the current session.
///
/// Threaded through the play loop by value; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TicTacToeScore {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl TicTacToeScore {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score with `result` counted.
    #[instrument]
    #[must_use]
    pub fn record(self, result: RoundResult) -> Self {
        let next = match result {
            RoundResult::Won(Player::X) => Self {
                x_wins: self.x_wins + 1,
                ..self
            },
            RoundResult::Won(Player::O) => Self {
                o_wins: self.o_wins + 1,
                ..self
            },
            RoundResult::Draw => Self {
                draws: self.draws + 1,
                ..self
            },
        };
        info!(x_wins = next.x_wins, o_wins = next.o_wins, draws = next.draws, "Score updated");
        next
    }

    /// Rounds played this session.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for TicTacToeScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X={}  O={}  Draws={}", self.x_wins, self.o_wins, self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let score = TicTacToeScore::new()
            .record(RoundResult::Won(Player::X))
            .record(RoundResult::Won(Player::X))
            .record(RoundResult::Won(Player::O))
            .record(RoundResult::Draw);

        assert_eq!(*score.x_wins(), 2);
        assert_eq!(*score.o_wins(), 1);
        assert_eq!(*score.draws(), 1);
        assert_eq!(score.rounds(), 4);
        assert_eq!(score.to_string(), "X=2  O=1  Draws=1");
    }
}
