//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the color printed on cards of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, from Two up to Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// Returns the label used when printing the rank (`"2"`..`"10"`, `"Jack"`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and Diamonds.
    Red,
    /// Clubs and Spades.
    Black,
    /// Suit name that is not one of the four standard suits.
    Unknown,
}

impl Color {
    /// Maps a free-form suit name to its color.
    ///
    /// Matching ignores case and surrounding whitespace. Names outside the four
    /// standard suits map to [`Color::Unknown`] instead of failing.
    ///
    /// ```
    /// use pokerdeck::Color;
    ///
    /// assert_eq!(Color::from_suit_name("hearts"), Color::Red);
    /// assert_eq!(Color::from_suit_name("Spades"), Color::Black);
    /// assert_eq!(Color::from_suit_name("Stars"), Color::Unknown);
    /// ```
    #[must_use]
    pub fn from_suit_name(name: &str) -> Self {
        let name = name.trim();
        ALL_SUITS
            .iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(name))
            .map_or(Self::Unknown, |suit| suit.color())
    }

    /// Returns the English name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Black => "Black",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// The color is computed once from the suit and never set on its own, so two
/// cards compare equal exactly when rank, suit and color all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    color: Color,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            color: suit.color(),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns a view that displays the card as `<suit>,<color>,<rank>`.
    ///
    /// ```
    /// use pokerdeck::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Queen, Suit::Diamonds);
    /// assert_eq!(card.record().to_string(), "Diamonds,Red,Queen");
    /// ```
    #[must_use]
    pub const fn record(&self) -> CardRecord<'_> {
        CardRecord(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} ({})", self.rank, self.suit, self.color)
    }
}

/// Comma-separated rendering of a [`Card`], as returned by [`Card::record`].
#[derive(Debug, Clone, Copy)]
pub struct CardRecord<'a>(&'a Card);

impl fmt::Display for CardRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0.suit, self.0.color, self.0.rank)
    }
}

/// Suits in deck construction order.
pub const ALL_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// Ranks in deck construction order.
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Number of cards per deck.
pub const DECK_SIZE: usize = ALL_SUITS.len() * ALL_RANKS.len();
