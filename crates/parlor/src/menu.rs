//! Main menu and the scores it carries between games.

use crate::Prompter;
use crate::games::{play_blackjack, play_rps, play_tictactoe};
use anyhow::Result;
use derive_getters::Getters;
use parlor_blackjack::BlackjackScore;
use parlor_core::RandomSource;
use parlor_rps::RpsScore;
use parlor_tictactoe::TicTacToeScore;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// The games on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, derive_more::Display)]
pub enum GameKind {
    /// Naughts and crosses, two players at one keyboard.
    #[display("Naughts and Crosses (PvP)")]
    TicTacToe,
    /// Rock, paper, scissors against the computer.
    #[display("Rock Paper Scissors (PvComputer)")]
    RockPaperScissors,
    /// Blackjack against the dealer.
    #[display("Blackjack (PvDealer)")]
    Blackjack,
}

impl GameKind {
    /// Games in menu order.
    pub const ALL: [GameKind; 3] = [
        GameKind::TicTacToe,
        GameKind::RockPaperScissors,
        GameKind::Blackjack,
    ];
}

/// Every game's score for this process. Starts at zero, never saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionScores {
    tictactoe: TicTacToeScore,
    rps: RpsScore,
    blackjack: BlackjackScore,
}

impl SessionScores {
    /// Creates zeroed scores.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Plays one game until the player declines a rematch.
#[instrument(skip(io, rng, scores))]
pub fn play_game<P, R>(
    game: GameKind,
    io: &mut P,
    rng: &mut R,
    scores: SessionScores,
) -> Result<SessionScores>
where
    P: Prompter + ?Sized,
    R: RandomSource + ?Sized,
{
    info!(%game, "Starting game");
    let scores = match game {
        GameKind::TicTacToe => SessionScores {
            tictactoe: play_tictactoe(io, scores.tictactoe)?,
            ..scores
        },
        GameKind::RockPaperScissors => SessionScores {
            rps: play_rps(io, rng, scores.rps)?,
            ..scores
        },
        GameKind::Blackjack => SessionScores {
            blackjack: play_blackjack(io, rng, scores.blackjack)?,
            ..scores
        },
    };
    Ok(scores)
}

/// Shows the menu until the player chooses to exit.
#[instrument(skip_all)]
pub fn run_menu<P, R>(io: &mut P, rng: &mut R, mut scores: SessionScores) -> Result<SessionScores>
where
    P: Prompter + ?Sized,
    R: RandomSource + ?Sized,
{
    let exit = GameKind::ALL.len() as i64 + 1;

    loop {
        io.clear()?;
        io.say("                GAMES              ")?;
        io.say("==================================")?;
        for (i, game) in GameKind::ALL.iter().enumerate() {
            io.say(&format!("{}) {game}", i + 1))?;
        }
        io.say(&format!("{exit}) Exit"))?;
        io.say("")?;

        let choice = io.int_in_range(&format!("Choose an option (1-{exit}): "), 1, exit)?;
        let Some(&game) = GameKind::ALL.get((choice - 1) as usize) else {
            io.say("\nGame closing!")?;
            info!(?scores, "Leaving menu");
            return Ok(scores);
        };

        scores = play_game(game, io, rng, scores)?;
    }
}
