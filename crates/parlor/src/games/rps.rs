//! Rock, paper, scissors against the computer.

use super::{BACK_TO_MENU, play_again};
use crate::Prompter;
use anyhow::{Result, anyhow};
use parlor_core::RandomSource;
use parlor_rps::{Choice, Outcome, RpsScore, pick, resolve};
use tracing::{info, instrument};

/// Runs throws until the player declines another.
#[instrument(skip(io, rng))]
pub fn play_rps<P, R>(io: &mut P, rng: &mut R, mut score: RpsScore) -> Result<RpsScore>
where
    P: Prompter + ?Sized,
    R: RandomSource + ?Sized,
{
    loop {
        io.clear()?;
        io.say("ROCK PAPER SCISSORS\n")?;
        io.say(&format!("Score: {score}\n"))?;
        for choice in Choice::ALL {
            io.say(&format!("{}) {choice}", choice.menu_number()))?;
        }

        let number = io.int_in_range("Choose (1-3): ", 1, 3)?;
        let player = Choice::from_menu(number as u32)
            .ok_or_else(|| anyhow!("Menu returned {number} outside 1-3"))?;
        let computer = pick(rng);
        io.say(&format!("\nComputer chose {computer}"))?;

        let outcome = resolve(player, computer);
        info!(%player, %computer, ?outcome, "Throw resolved");
        io.say(match outcome {
            Outcome::Draw => "Draw!",
            Outcome::AWins => "You win!",
            Outcome::BWins => "You lose!",
        })?;
        score = score.record(outcome);

        if !play_again(io)? {
            break;
        }
    }
    io.pause(BACK_TO_MENU)?;
    Ok(score)
}
