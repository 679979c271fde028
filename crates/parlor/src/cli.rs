//! Command-line interface for parlor.

use crate::GameKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlor - naughts and crosses, rock paper scissors and blackjack
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Terminal menu of three turn-based games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the random source (reproducible computer throws and cards)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Settings file (defaults to parlor.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; the menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the games menu
    Menu,

    /// Play one game, then exit
    Play {
        /// Game to play
        #[arg(value_enum)]
        game: GameKind,
    },
}
