//! Deck configuration options.

/// Default number of cards in a hand.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokerdeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_hand_size(7)
///     .with_shuffle_on_build(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of cards dealt by [`Deck::draw_hand`](crate::Deck::draw_hand).
    pub hand_size: usize,
    /// Whether the deck is shuffled right after it is built.
    pub shuffle_on_build: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            shuffle_on_build: false,
        }
    }
}

impl DeckOptions {
    /// Sets the number of cards in a hand.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_hand_size(2);
    /// assert_eq!(options.hand_size, 2);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether the deck is shuffled right after it is built.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_build(true);
    /// assert!(options.shuffle_on_build);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_build(mut self, shuffle_on_build: bool) -> Self {
        self.shuffle_on_build = shuffle_on_build;
        self
    }
}
