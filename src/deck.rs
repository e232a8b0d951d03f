//! The deck and its draw operations.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{ALL_RANKS, ALL_SUITS, Card, DECK_SIZE};
use crate::error::DrawError;
use crate::options::DeckOptions;

/// A 52-card deck that remembers every card it has dealt.
///
/// Each card is either still in the deck or in the dealt set, never both.
/// Randomness comes from the provider `R`, which defaults to a seeded
/// [`ChaCha8Rng`] so runs can be replayed.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Cards still in the deck, top first.
    remaining: Vec<Card>,
    /// Cards removed from the deck so far.
    dealt: HashSet<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: R,
}

impl Deck {
    /// Creates a new deck whose randomness is seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::{DECK_SIZE, Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default(), 42);
    /// assert_eq!(deck.remaining_count(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a new deck drawing its randomness from `rng`.
    ///
    /// Cards are laid out suit by suit (Hearts, Diamonds, Clubs, Spades), each
    /// suit from Two to Ace, then shuffled if the options ask for it.
    #[must_use]
    pub fn with_rng(options: DeckOptions, rng: R) -> Self {
        let mut deck = Self {
            remaining: Self::ordered_cards(),
            dealt: HashSet::with_capacity(DECK_SIZE),
            options,
            rng,
        };

        if options.shuffle_on_build {
            deck.shuffle();
        }

        deck
    }

    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in ALL_SUITS {
            for rank in ALL_RANKS {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Randomly reorders the cards left in the deck.
    ///
    /// Dealt cards are not returned to the deck.
    pub fn shuffle(&mut self) {
        self.remaining.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw_top(&mut self) -> Result<Card, DrawError> {
        if self.remaining.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        Ok(self.take(0))
    }

    /// Removes and returns a card chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw_random(&mut self) -> Result<Card, DrawError> {
        if self.remaining.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = self.rng.random_range(0..self.remaining.len());
        Ok(self.take(index))
    }

    /// Deals a hand of [`DeckOptions::hand_size`] cards from the top.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if fewer cards are left than the
    /// hand needs. The deck is left untouched in that case.
    pub fn draw_hand(&mut self) -> Result<Vec<Card>, DrawError> {
        self.draw_hand_of(self.options.hand_size)
    }

    /// Deals `size` cards from the top, in the order they were removed.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if fewer than `size` cards are
    /// left. The deck is left untouched in that case.
    pub fn draw_hand_of(&mut self, size: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.remaining.len();
        if remaining < size {
            return Err(DrawError::InsufficientCards {
                requested: size,
                remaining,
            });
        }

        let hand: Vec<Card> = self.remaining.drain(..size).collect();
        self.dealt.extend(hand.iter().copied());

        Ok(hand)
    }

    fn take(&mut self, index: usize) -> Card {
        let card = self.remaining.remove(index);
        self.dealt.insert(card);
        card
    }
}

impl<R> Deck<R> {
    /// Returns the number of cards left in the deck.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Returns whether the deck has run out of cards.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns the cards left in the deck, top first.
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    /// Returns the number of cards dealt so far.
    pub fn dealt_count(&self) -> usize {
        self.dealt.len()
    }

    /// Returns the cards dealt so far, in no particular order.
    pub fn dealt(&self) -> impl Iterator<Item = &Card> + '_ {
        self.dealt.iter()
    }

    /// Returns whether `card` has been dealt.
    pub fn is_dealt(&self, card: &Card) -> bool {
        self.dealt.contains(card)
    }

    /// Returns the deck options.
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }
}
