//! Typestate round of blackjack.
//!
//! The phase is encoded in the type parameter, so the dealer's hole card
//! cannot be read during the player's turn and a resolved round cannot be
//! hit again.

use crate::{Card, Hand, dealer_play, draw_card};
use parlor_core::RandomSource;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{info, instrument};

/// Typestate marker: cards not yet dealt.
#[derive(Debug, Clone, Copy)]
pub struct Dealing;

/// Typestate marker: player chooses hit or stand.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTurn;

/// Typestate marker: dealer draws to 17.
#[derive(Debug, Clone, Copy)]
pub struct DealerTurn;

/// Typestate marker: the round is over.
#[derive(Debug, Clone, Copy)]
pub struct Resolved;

/// How a round ended, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RoundOutcome {
    /// Player beat the dealer.
    #[display("You win!")]
    PlayerWin,
    /// Dealer beat the player.
    #[display("You lose!")]
    PlayerLoss,
    /// Equal totals.
    #[display("Push.")]
    Push,
}

/// Decides a finished round.
///
/// A busted player loses whatever the dealer holds. Otherwise a busted
/// dealer loses, and failing that the higher total wins.
#[instrument]
pub fn resolve_round(
    player_total: u32,
    dealer_total: u32,
    player_busted: bool,
    dealer_busted: bool,
) -> RoundOutcome {
    if player_busted {
        RoundOutcome::PlayerLoss
    } else if dealer_busted {
        RoundOutcome::PlayerWin
    } else if player_total > dealer_total {
        RoundOutcome::PlayerWin
    } else if player_total < dealer_total {
        RoundOutcome::PlayerLoss
    } else {
        RoundOutcome::Push
    }
}

/// One round of blackjack in phase `S`.
#[derive(Debug, Clone)]
pub struct Round<S> {
    player: Hand,
    dealer: Hand,
    _state: PhantomData<S>,
}

/// Result of the player taking a card.
#[derive(Debug)]
pub enum HitResult {
    /// Still 21 or under; the player chooses again.
    Playing(Round<PlayerTurn>),
    /// Over 21; the round is lost and the dealer does not draw.
    Busted(Round<Resolved>),
}

impl<S> Round<S> {
    fn transition<T>(self) -> Round<T> {
        Round {
            player: self.player,
            dealer: self.dealer,
            _state: PhantomData,
        }
    }

    /// The player's hand.
    pub fn player_hand(&self) -> &Hand {
        &self.player
    }
}

impl Round<Dealing> {
    /// Creates a round with empty hands.
    pub fn new() -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            _state: PhantomData,
        }
    }

    /// Deals two cards each, alternating player then dealer.
    #[instrument(skip_all)]
    pub fn deal<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Round<PlayerTurn> {
        for _ in 0..2 {
            self.player.push(draw_card(rng));
            self.dealer.push(draw_card(rng));
        }
        info!(
            player = %self.player.labels(),
            player_total = self.player.total(),
            dealer_up = %self.dealer.cards()[0],
            "Dealt"
        );
        self.transition()
    }
}

impl Default for Round<Dealing> {
    fn default() -> Self {
        Self::new()
    }
}

impl Round<PlayerTurn> {
    /// The dealer's face-up card.
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Takes one card.
    #[instrument(skip_all)]
    pub fn hit<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> HitResult {
        let card = draw_card(rng);
        self.player.push(card);
        info!(%card, total = self.player.total(), "Player hits");

        if self.player.is_bust() {
            info!("Player busts");
            HitResult::Busted(self.transition())
        } else {
            HitResult::Playing(self)
        }
    }

    /// Ends the player's turn.
    #[instrument(skip_all, fields(total = self.player.total()))]
    pub fn stand(self) -> Round<DealerTurn> {
        info!("Player stands");
        self.transition()
    }
}

impl Round<DealerTurn> {
    /// The dealer's full hand, hole card included.
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Lets the dealer draw to 17 and resolves the round.
    #[instrument(skip_all)]
    pub fn play_out<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Round<Resolved> {
        self.dealer = dealer_play(self.dealer, rng);
        self.transition()
    }
}

impl Round<Resolved> {
    /// The dealer's final hand.
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Outcome for the player.
    pub fn outcome(&self) -> RoundOutcome {
        resolve_round(
            self.player.total(),
            self.dealer.total(),
            self.player.is_bust(),
            self.dealer.is_bust(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::ScriptedSource;

    #[test]
    fn test_player_bust_loses_regardless() {
        for dealer_total in 0..=30 {
            assert_eq!(
                resolve_round(22, dealer_total, true, dealer_total > 21),
                RoundOutcome::PlayerLoss
            );
        }
    }

    #[test]
    fn test_dealer_bust_wins() {
        assert_eq!(resolve_round(12, 25, false, true), RoundOutcome::PlayerWin);
    }

    #[test]
    fn test_compare_totals() {
        assert_eq!(resolve_round(20, 18, false, false), RoundOutcome::PlayerWin);
        assert_eq!(resolve_round(17, 19, false, false), RoundOutcome::PlayerLoss);
        assert_eq!(resolve_round(18, 18, false, false), RoundOutcome::Push);
    }

    #[test]
    fn test_deal_alternates() {
        // player: 10, 9 / dealer: K, 7
        let mut src = ScriptedSource::new(vec![10, 13, 9, 7]);
        let round = Round::new().deal(&mut src);
        assert_eq!(round.player_hand().labels(), "10, 9");
        assert_eq!(round.dealer_up_card().map(Card::label), Some("K"));
    }

    #[test]
    fn test_stand_then_dealer_stands_pat() {
        // player 19 vs dealer 17
        let mut src = ScriptedSource::new(vec![10, 13, 9, 7]);
        let round = Round::new().deal(&mut src).stand();
        assert_eq!(round.dealer_hand().total(), 17);
        let resolved = round.play_out(&mut src);
        assert_eq!(resolved.dealer_hand().len(), 2);
        assert_eq!(resolved.outcome(), RoundOutcome::PlayerWin);
    }

    #[test]
    fn test_hit_into_bust_skips_dealer() {
        // player 10, 6 / dealer 10, 5, then player draws a queen
        let mut src = ScriptedSource::new(vec![10, 10, 6, 5, 12]);
        let round = Round::new().deal(&mut src);
        match round.hit(&mut src) {
            HitResult::Busted(resolved) => {
                assert_eq!(resolved.player_hand().total(), 26);
                assert_eq!(resolved.dealer_hand().len(), 2);
                assert_eq!(resolved.outcome(), RoundOutcome::PlayerLoss);
            }
            HitResult::Playing(_) => panic!("26 should bust"),
        }
        assert_eq!(src.consumed(), 5);
    }

    #[test]
    fn test_hit_then_push() {
        // player 5, 5 / dealer 10, 8; player draws 8 -> 18, dealer stands on 18
        let mut src = ScriptedSource::new(vec![5, 10, 5, 8, 8]);
        let round = Round::new().deal(&mut src);
        let round = match round.hit(&mut src) {
            HitResult::Playing(round) => round,
            HitResult::Busted(_) => panic!("18 is not a bust"),
        };
        let resolved = round.stand().play_out(&mut src);
        assert_eq!(resolved.outcome(), RoundOutcome::Push);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RoundOutcome::PlayerWin.to_string(), "You win!");
        assert_eq!(RoundOutcome::Push.to_string(), "Push.");
    }
}
