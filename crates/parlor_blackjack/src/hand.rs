//! Hands and their totals.

use crate::Card;
use serde::{Deserialize, Serialize};

/// The best total a hand can have.
pub const BLACKJACK: u32 = 21;

/// Sum of card values after soft-ace downgrades, plus the number of aces
/// still counted as 11.
fn evaluate(cards: &[Card]) -> (u32, u32) {
    let mut total: u32 = cards.iter().map(Card::value).sum();
    let mut soft_aces = cards.iter().filter(|c| c.is_ace()).count() as u32;

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    (total, soft_aces)
}

/// Total of `cards`, downgrading aces from 11 to 1 one at a time while the
/// total is over 21.
pub fn hand_total(cards: &[Card]) -> u32 {
    evaluate(cards).0
}

/// An ordered sequence of cards. The total is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in the order they were dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Best total, see [`hand_total`].
    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }

    /// True if an ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1 > 0
    }

    /// True if the total is over 21.
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Two-card 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    /// Card labels joined with ", ".
    pub fn labels(&self) -> String {
        self.cards
            .iter()
            .map(Card::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
