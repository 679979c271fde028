//! Dealer policy.

use crate::{Hand, draw_card};
use parlor_core::RandomSource;
use tracing::{debug, instrument};

/// The dealer stands on this total or above.
pub const DEALER_STANDS_ON: u32 = 17;

/// Draws for the dealer until the hand totals at least 17.
///
/// A bust is a normal finishing state. A hand that already stands is
/// returned unchanged without touching the random source.
#[instrument(skip(hand, rng), fields(start_total = hand.total()))]
pub fn dealer_play<R: RandomSource + ?Sized>(mut hand: Hand, rng: &mut R) -> Hand {
    while hand.total() < DEALER_STANDS_ON {
        let card = draw_card(rng);
        hand.push(card);
        debug!(%card, total = hand.total(), "Dealer hits");
    }
    debug!(total = hand.total(), bust = hand.is_bust(), "Dealer stands");
    hand
}
