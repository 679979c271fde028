//! Naughts and crosses, player vs player.

use super::{BACK_TO_MENU, play_again};
use crate::{Prompter, render};
use anyhow::Result;
use parlor_tictactoe::{Board, Player, RoundResult, TicTacToeScore, check_draw, check_win};
use tracing::{info, instrument, warn};

const TITLE: &str = "NAUGHTS AND CROSSES\n";

fn show_board<P: Prompter + ?Sized>(io: &mut P, board: &Board) -> Result<()> {
    for line in render::board_lines(board) {
        io.say(&line)?;
    }
    Ok(())
}

/// Plays one round, X first, until a line or a full board.
#[instrument(skip_all)]
fn play_round<P: Prompter + ?Sized>(io: &mut P, score: &TicTacToeScore) -> Result<RoundResult> {
    let mut board = Board::new();
    let mut current = Player::X;

    loop {
        io.clear()?;
        io.say(TITLE)?;
        io.say(&format!("Score: {score}\n"))?;
        show_board(io, &board)?;
        io.say("")?;
        io.say(&format!("Player {current}'s turn."))?;
        io.say("Choose a square by typing a number 1-9:")?;

        let number = io.int_in_range("Move (1-9): ", 1, 9)?;
        let index = (number - 1) as usize;

        board = match board.apply_move(index, current) {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, player = %current, "Move rejected");
                io.pause(&format!("{e}. Try again."))?;
                continue;
            }
        };

        let result = if check_win(&board, current) {
            Some(RoundResult::Won(current))
        } else if check_draw(&board) {
            Some(RoundResult::Draw)
        } else {
            None
        };

        if let Some(result) = result {
            io.clear()?;
            io.say(TITLE)?;
            show_board(io, &board)?;
            match result {
                RoundResult::Won(winner) => io.say(&format!("\nPlayer {winner} wins!"))?,
                RoundResult::Draw => io.say("\nDraw!")?,
            }
            info!(?result, board = %board.display(), "Round over");
            return Ok(result);
        }

        current = current.opponent();
    }
}

/// Runs rounds until the players decline a rematch.
#[instrument(skip(io))]
pub fn play_tictactoe<P: Prompter + ?Sized>(
    io: &mut P,
    mut score: TicTacToeScore,
) -> Result<TicTacToeScore> {
    loop {
        let result = play_round(io, &score)?;
        score = score.record(result);
        if !play_again(io)? {
            break;
        }
    }
    io.pause(BACK_TO_MENU)?;
    Ok(score)
}
