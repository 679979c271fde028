//! Prompting seam between the play loops and the terminal.
//!
//! The rule engines never see raw text. Everything typed at the keyboard is
//! validated here, and bad input is answered with a message and a fresh
//! prompt rather than an error.

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Validated input and plain output for the play loops.
pub trait Prompter {
    /// Asks until the answer is an integer in `min..=max`.
    fn int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64>;

    /// Asks until the answer is `Y` or `N` (any case).
    fn yes_no(&mut self, prompt: &str) -> Result<bool>;

    /// Asks until the first typed character is one of `allowed` (any case).
    ///
    /// Returns the character upper-cased.
    fn choice_char(&mut self, prompt: &str, allowed: &[char]) -> Result<char>;

    /// Prints one line.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Clears the screen, if the prompter draws on a real terminal.
    fn clear(&mut self) -> Result<()>;

    /// Prints `message` and waits for Enter.
    fn pause(&mut self, message: &str) -> Result<()>;
}

/// Line-based prompter over any reader and writer.
///
/// In the binary this wraps stdin and stdout; tests hand it a
/// `Cursor` of scripted answers and a `Vec<u8>` to capture the transcript.
#[derive(Debug)]
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Creates a prompter. `clear_screen` enables terminal clears.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes the prompt and reads one line, without the line ending.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed");
        }
        debug!(answer = %line.trim_end(), "Read input");
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    #[instrument(skip(self))]
    fn int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let answer = self.ask(prompt)?;
            let Ok(value) = answer.trim().parse::<i64>() else {
                self.say("Invalid input. Enter a number.")?;
                continue;
            };
            if !(min..=max).contains(&value) {
                self.say(&format!("Enter a number between {min} and {max}."))?;
                continue;
            }
            return Ok(value);
        }
    }

    #[instrument(skip(self))]
    fn yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.ask(prompt)?;
            let answer = answer.trim();
            if answer.is_empty() {
                self.say("Enter Y or N.")?;
                continue;
            }
            match answer.to_uppercase().as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => self.say("Invalid input. Enter Y or N.")?,
            }
        }
    }

    #[instrument(skip(self))]
    fn choice_char(&mut self, prompt: &str, allowed: &[char]) -> Result<char> {
        loop {
            let answer = self.ask(prompt)?;
            let Some(first) = answer.trim().chars().next() else {
                self.say("Invalid input.")?;
                continue;
            };
            let upper = first.to_ascii_uppercase();
            if allowed.iter().any(|a| a.to_ascii_uppercase() == upper) {
                return Ok(upper);
            }
            self.say("Invalid choice.")?;
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write output")
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear screen")?;
        }
        Ok(())
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        self.say(message)?;
        self.ask("")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false)
    }

    fn transcript(p: ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_int_reprompts_until_valid() {
        let mut p = prompter("abc\n12\n 3 \n");
        assert_eq!(p.int_in_range("Pick: ", 1, 4).unwrap(), 3);
        let out = transcript(p);
        assert!(out.contains("Invalid input. Enter a number."));
        assert!(out.contains("Enter a number between 1 and 4."));
    }

    #[test]
    fn test_yes_no() {
        let mut p = prompter("\nmaybe\ny\nN\n");
        assert!(p.yes_no("Again? ").unwrap());
        assert!(!p.yes_no("Again? ").unwrap());
        let out = transcript(p);
        assert!(out.contains("Enter Y or N."));
        assert!(out.contains("Invalid input. Enter Y or N."));
    }

    #[test]
    fn test_choice_char_uses_first_character() {
        let mut p = prompter("x\n\nstand\n");
        assert_eq!(p.choice_char("H/S: ", &['H', 'S']).unwrap(), 'S');
        let out = transcript(p);
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Invalid input."));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(p.yes_no("Again? ").is_err());
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut p = prompter("");
        p.clear().unwrap();
        assert!(transcript(p).is_empty());
    }
}
