//! A 52-card deck simulator with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that builds an ordered deck, shuffles
//! it, and deals cards from the top, at random, or as whole hands while
//! keeping a record of every card dealt. With the `std` feature, [`Shell`]
//! drives a deck from line-oriented text commands.
//!
//! # Example
//!
//! ```
//! use pokerdeck::{Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! let card = deck.draw_top().unwrap();
//! assert_eq!(deck.remaining_count(), 51);
//! assert!(deck.is_dealt(&card));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod command;
pub mod deck;
pub mod error;
pub mod options;
#[cfg(feature = "std")]
pub mod shell;

// Re-export main types
pub use card::{ALL_RANKS, ALL_SUITS, Card, CardRecord, Color, DECK_SIZE, Rank, Suit};
pub use command::Command;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ShellError;
pub use error::{DrawError, ParseCommandError};
pub use options::{DEFAULT_HAND_SIZE, DeckOptions};
#[cfg(feature = "std")]
pub use shell::{Flow, Shell};
