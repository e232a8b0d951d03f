//! Interactive command loop over a single deck.

use std::io::{BufRead, Write};

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::card::Card;
use crate::command::Command;
use crate::deck::Deck;
use crate::error::{DrawError, ShellError};

const PROMPT: &str = "Choose a command (head, pick, hand, shuffle) or 'exit' to quit: ";
const USAGE: &str = "Unrecognized command. Use: head, pick, hand, shuffle, or exit.";

/// Whether the shell keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next command.
    Continue,
    /// Stop the loop.
    Exit,
}

/// Reads commands from `input`, applies them to a deck and writes the results
/// to `output`.
pub struct Shell<I, O, R> {
    deck: Deck<R>,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write, R: Rng> Shell<I, O, R> {
    /// Creates a shell that owns `deck`.
    pub const fn new(deck: Deck<R>, input: I, output: O) -> Self {
        Self {
            deck,
            input,
            output,
        }
    }

    /// Runs the loop until an exit command or the end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            // Lines that are not valid UTF-8 fall through to the usage hint.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            if self.handle_line(&String::from_utf8_lossy(&line))? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Handles one line of input.
    ///
    /// Unknown commands print a usage hint and leave the deck untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(_) => {
                writeln!(self.output, "{USAGE}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Applies `command` to the deck and writes its result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::Head => {
                writeln!(self.output, "Top card of the deck:")?;
                let drawn = self.deck.draw_top();
                self.report_card(drawn)?;
            }
            Command::Pick => {
                writeln!(self.output, "\nDrawing a random card:")?;
                let drawn = self.deck.draw_random();
                self.report_card(drawn)?;
            }
            Command::Hand => {
                let size = self.deck.options().hand_size;
                writeln!(self.output, "\nDealing a hand of {size} cards:")?;
                match self.deck.draw_hand() {
                    Ok(hand) => self.report_cards(&hand)?,
                    Err(err) => self.report_error(err)?,
                }
            }
            Command::Shuffle => {
                writeln!(self.output, "\nShuffling the deck:")?;
                self.deck.shuffle();
                writeln!(self.output, "The deck has been shuffled.")?;
            }
            Command::Exit => {
                writeln!(self.output, "Exiting.")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn report_card(&mut self, drawn: Result<Card, DrawError>) -> Result<(), ShellError> {
        match drawn {
            Ok(card) => self.report_cards(&[card]),
            Err(err) => self.report_error(err),
        }
    }

    fn report_cards(&mut self, cards: &[Card]) -> Result<(), ShellError> {
        for card in cards {
            writeln!(self.output, "{}", card.record())?;
        }
        writeln!(
            self.output,
            "{} cards left in the deck.",
            self.deck.remaining_count()
        )?;
        Ok(())
    }

    fn report_error(&mut self, err: DrawError) -> Result<(), ShellError> {
        match err {
            DrawError::EmptyDeck => writeln!(self.output, "No more cards in the deck.")?,
            DrawError::InsufficientCards { .. } => writeln!(
                self.output,
                "Not enough cards in the deck to deal a hand."
            )?,
        }
        Ok(())
    }
}

impl<I, O, R> Shell<I, O, R> {
    /// Returns the deck driven by the shell.
    pub const fn deck(&self) -> &Deck<R> {
        &self.deck
    }

    /// Consumes the shell, returning its deck and output sink.
    pub fn into_parts(self) -> (Deck<R>, O) {
        (self.deck, self.output)
    }
}
