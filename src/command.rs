//! Shell command parsing.

use alloc::borrow::ToOwned;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCommandError;

/// A command accepted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Draw the top card.
    Head,
    /// Draw a random card.
    Pick,
    /// Deal a hand from the top.
    Hand,
    /// Shuffle the cards left in the deck.
    Shuffle,
    /// Leave the shell.
    Exit,
}

impl Command {
    /// Returns the keyword that selects the command.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Pick => "pick",
            Self::Hand => "hand",
            Self::Shuffle => "shuffle",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parses a command, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use pokerdeck::Command;
    ///
    /// assert_eq!(" HEAD ".parse(), Ok(Command::Head));
    /// assert_eq!("quit".parse(), Ok(Command::Exit));
    /// assert!("foo".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let matches = |keyword: &str| input.eq_ignore_ascii_case(keyword);

        if matches("head") {
            Ok(Self::Head)
        } else if matches("pick") {
            Ok(Self::Pick)
        } else if matches("hand") {
            Ok(Self::Hand)
        } else if matches("shuffle") {
            Ok(Self::Shuffle)
        } else if matches("exit") || matches("quit") {
            Ok(Self::Exit)
        } else {
            Err(ParseCommandError::Unrecognized(input.to_owned()))
        }
    }
}
