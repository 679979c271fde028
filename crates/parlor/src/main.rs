//! Parlor - unified CLI
//!
//! Main menu, or a single game via `parlor play <game>`.

use anyhow::{Context, Result};
use clap::Parser;
use parlor::{Cli, Command, ConsolePrompter, SessionScores, Settings, play_game, run_menu};
use parlor_core::GameRng;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_seed(cli.seed);
    init_tracing(&settings)?;

    let mut rng = match settings.seed() {
        Some(seed) => GameRng::new(*seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "Starting parlor");

    let stdin = io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), io::stdout(), *settings.clear_screen());

    let scores = match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(&mut prompter, &mut rng, SessionScores::new())?,
        Command::Play { game } => play_game(game, &mut prompter, &mut rng, SessionScores::new())?,
    };

    info!(?scores, "Session over");
    Ok(())
}

/// Logs to a file so tracing output never lands on the game screen.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
