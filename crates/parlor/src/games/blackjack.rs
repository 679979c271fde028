//! Blackjack against the dealer bot.

use super::{BACK_TO_MENU, play_again};
use crate::{Prompter, render};
use anyhow::Result;
use parlor_blackjack::{BlackjackScore, HitResult, Round, RoundOutcome};
use parlor_core::RandomSource;
use tracing::{info, instrument};

/// Plays one round from the deal to resolution.
#[instrument(skip_all)]
fn play_round<P, R>(io: &mut P, rng: &mut R, score: &BlackjackScore) -> Result<RoundOutcome>
where
    P: Prompter + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut round = Round::new().deal(rng);

    let resolved = loop {
        io.clear()?;
        io.say("BLACKJACK\n")?;
        io.say(&format!("Score: {score}\n"))?;
        if let Some(up) = round.dealer_up_card() {
            io.say(&format!("Dealer shows: {up}  [Hidden]\n"))?;
        }
        let hand = round.player_hand();
        io.say(&format!("Your hand: {}", hand.labels()))?;
        io.say(&format!("Total: {}\n", hand.total()))?;

        match io.choice_char("Hit or Stand? (H/S): ", &['H', 'S'])? {
            'S' => break round.stand().play_out(rng),
            _ => match round.hit(rng) {
                HitResult::Playing(next) => round = next,
                HitResult::Busted(resolved) => break resolved,
            },
        }
    };

    let outcome = resolved.outcome();
    let player = resolved.player_hand();
    let dealer = resolved.dealer_hand();

    io.clear()?;
    io.say("BLACKJACK RESULT\n")?;
    io.say(&format!("Dealer: {}", render::hand_line(dealer)))?;
    io.say(&format!("You:    {}\n", render::hand_line(player)))?;

    let message = match outcome {
        RoundOutcome::PlayerLoss if player.is_bust() => "You busted. You lose!".to_string(),
        RoundOutcome::PlayerWin if dealer.is_bust() => "Dealer busted. You win!".to_string(),
        RoundOutcome::PlayerWin if player.is_blackjack() => "Blackjack! You win!".to_string(),
        _ => outcome.to_string(),
    };
    io.say(&message)?;

    info!(
        player = player.total(),
        dealer = dealer.total(),
        %outcome,
        "Round resolved"
    );
    Ok(outcome)
}

/// Runs rounds until the player declines another.
#[instrument(skip(io, rng))]
pub fn play_blackjack<P, R>(
    io: &mut P,
    rng: &mut R,
    mut score: BlackjackScore,
) -> Result<BlackjackScore>
where
    P: Prompter + ?Sized,
    R: RandomSource + ?Sized,
{
    loop {
        let outcome = play_round(io, rng, &score)?;
        score = score.record(outcome);
        if !play_again(io)? {
            break;
        }
    }
    io.pause(BACK_TO_MENU)?;
    Ok(score)
}
