//! Cards and the infinite shoe.

use parlor_core::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Card rank. Suits play no part in blackjack and are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Rank {
    /// Ace, counted as 11 until the hand would bust.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, ace low.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank from its number, ace = 1 through king = 13.
    pub fn from_number(number: u32) -> Option<Rank> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }

    /// Label shown on screen.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Face value. Aces count 11 here; the hand downgrades them.
    pub fn value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            pip => pip as u32 + 1,
        }
    }
}

/// A dealt card: a display label paired with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
}

impl Card {
    /// Creates a card of the given rank.
    pub fn new(rank: Rank) -> Self {
        Self { rank }
    }

    /// The card's rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Label shown on screen ("A", "2".."10", "J", "Q", "K").
    pub fn label(&self) -> &'static str {
        self.rank.label()
    }

    /// Value before any ace downgrade.
    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    /// True for aces.
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Self::new(rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Draws one card: a rank picked uniformly from 1..=13.
///
/// Only the random source is advanced.
#[instrument(skip(rng))]
pub fn draw_card<R: RandomSource + ?Sized>(rng: &mut R) -> Card {
    let number = rng.range_inclusive(1, 13);
    let rank = Rank::from_number(number).unwrap_or(Rank::Ace);
    debug!(number, card = rank.label(), "Drew card");
    Card::new(rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::{GameRng, ScriptedSource};
    use strum::IntoEnumIterator;

    #[test]
    fn test_values() {
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Nine.value(), 9);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn test_pip_labels_match_values() {
        for rank in Rank::iter().filter(|r| (2..=10).contains(&r.value())) {
            if matches!(rank, Rank::Jack | Rank::Queen | Rank::King) {
                continue;
            }
            assert_eq!(rank.label(), rank.value().to_string());
        }
    }

    #[test]
    fn test_draw_maps_numbers_to_ranks() {
        let mut src = ScriptedSource::new((1..=13).collect::<Vec<u32>>());
        let labels: Vec<&str> = (0..13).map(|_| draw_card(&mut src).label()).collect();
        assert_eq!(
            labels,
            ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
        );
    }

    #[test]
    fn test_draw_covers_every_rank() {
        let mut rng = GameRng::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(draw_card(&mut rng).rank());
        }
        assert_eq!(seen.len(), 13);
    }
}
