//! Outcome of a throw.

use crate::Choice;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of comparing throw `a` against throw `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Same throw.
    Draw,
    /// `a` beats `b`.
    AWins,
    /// `b` beats `a`.
    BWins,
}

/// Compares two throws: Rock > Scissors, Scissors > Paper, Paper > Rock.
#[instrument]
pub fn resolve(a: Choice, b: Choice) -> Outcome {
    if a == b {
        Outcome::Draw
    } else if a.beats() == b {
        Outcome::AWins
    } else {
        Outcome::BWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rock_beats_scissors() {
        assert_eq!(resolve(Choice::Rock, Choice::Scissors), Outcome::AWins);
        assert_eq!(resolve(Choice::Scissors, Choice::Rock), Outcome::BWins);
    }

    #[test]
    fn test_paper_tie() {
        assert_eq!(resolve(Choice::Paper, Choice::Paper), Outcome::Draw);
    }

    #[test]
    fn test_full_table() {
        use Choice::*;
        let table = [
            (Rock, Rock, Outcome::Draw),
            (Rock, Paper, Outcome::BWins),
            (Rock, Scissors, Outcome::AWins),
            (Paper, Rock, Outcome::AWins),
            (Paper, Paper, Outcome::Draw),
            (Paper, Scissors, Outcome::BWins),
            (Scissors, Rock, Outcome::BWins),
            (Scissors, Paper, Outcome::AWins),
            (Scissors, Scissors, Outcome::Draw),
        ];
        for (a, b, expected) in table {
            assert_eq!(resolve(a, b), expected, "{a} vs {b}");
        }
    }

    #[test]
    fn test_antisymmetric() {
        for a in Choice::iter() {
            for b in Choice::iter() {
                let flipped = match resolve(a, b) {
                    Outcome::Draw => Outcome::Draw,
                    Outcome::AWins => Outcome::BWins,
                    Outcome::BWins => Outcome::AWins,
                };
                assert_eq!(resolve(b, a), flipped);
            }
        }
    }
}
