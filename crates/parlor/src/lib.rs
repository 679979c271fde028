//! Parlor - a terminal menu of three turn-based games.
//!
//! The rule engines live in their own crates; this crate is the shell
//! around them.
//!
//! # Architecture
//!
//! - **Prompter**: validated keyboard input and plain-text output
//! - **Games**: one play loop per game, threading its score by value
//! - **Menu**: game selection and the session's scores
//! - **Settings**: optional TOML settings file
//!
//! # Example
//!
//! ```
//! use parlor::{ConsolePrompter, GameKind, SessionScores, play_game};
//! use parlor_core::ScriptedSource;
//! use std::io::Cursor;
//!
//! # fn example() -> anyhow::Result<()> {
//! // Throw rock against a computer scripted to pick scissors, then stop
//! let mut io = ConsolePrompter::new(Cursor::new("1\nn\n\n"), Vec::new(), false);
//! let mut rng = ScriptedSource::new(vec![3]);
//! let scores = play_game(GameKind::RockPaperScissors, &mut io, &mut rng, SessionScores::new())?;
//! assert_eq!(*scores.rps().wins(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
mod input;
mod menu;
mod render;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
pub use games::{play_blackjack, play_rps, play_tictactoe};
pub use input::{ConsolePrompter, Prompter};
pub use menu::{GameKind, SessionScores, play_game, run_menu};
pub use render::{board_lines, hand_line};
