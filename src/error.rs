//! Error types for deck and shell operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Fewer cards left than the hand needs.
    #[error("not enough cards to deal a hand of {requested} ({remaining} left)")]
    InsufficientCards {
        /// Number of cards the hand needs.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when parsing a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// The input does not name a known command.
    #[error("unrecognized command `{0}`")]
    Unrecognized(String),
}

/// Errors that end the interactive shell.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}
