//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

/// Color of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Suit {
    /// Every suit, in the order a restored deck lays them out.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the glyph for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
            Self::Clubs => '\u{2663}',
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }

    /// Returns the color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Spades | Self::Clubs => Color::Black,
            Self::Hearts | Self::Diamonds => Color::Red,
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a suit name (case-insensitive) or its glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| {
                let mut chars = s.chars();
                let is_glyph = chars.next() == Some(suit.symbol()) && chars.next().is_none();
                is_glyph || s.eq_ignore_ascii_case(suit.name())
            })
            .ok_or(CardError::UnknownSuit)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("Black"),
            Self::Red => f.write_str("Red"),
        }
    }
}

/// A playing card.
///
/// Cards are immutable once built; equality and hashing use only the rank
/// and the suit.
///
/// ```
/// use deckrs::{Card, Suit};
///
/// let card = Card::new(Card::QUEEN, Suit::Hearts).unwrap();
/// assert_eq!(card.to_string(), "[QUEEN \u{2665}] - Red");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Rank of an ace.
    pub const ACE: u8 = 1;
    /// Rank of a jack.
    pub const JACK: u8 = 11;
    /// Rank of a queen.
    pub const QUEEN: u8 = 12;
    /// Rank of a king.
    pub const KING: u8 = 13;
    /// Lowest valid rank.
    pub const MIN_RANK: u8 = Self::ACE;
    /// Highest valid rank.
    pub const MAX_RANK: u8 = Self::KING;

    /// Creates a new card.
    ///
    /// `suit` accepts either a [`Suit`] or an `Option<Suit>`, where `None`
    /// stands for a missing suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingSuit`] if no suit is given, or
    /// [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    pub fn new(rank: u8, suit: impl Into<Option<Suit>>) -> Result<Self, CardError> {
        log::trace!("creating card with rank {rank}");
        let suit = suit.into().ok_or(CardError::MissingSuit)?;
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    /// Builds a card from values already known to be in range.
    pub(crate) const fn new_unchecked(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The color of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns the face name for court cards and aces, `None` for 2 to 10.
    #[must_use]
    pub const fn rank_name(&self) -> Option<&'static str> {
        match self.rank {
            Self::ACE => Some("ACE"),
            Self::JACK => Some("JACK"),
            Self::QUEEN => Some("QUEEN"),
            Self::KING => Some("KING"),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        match self.rank_name() {
            Some(name) => f.write_str(name)?,
            None => write!(f, "{}", self.rank)?,
        }
        write!(f, " {}] - {}", self.suit.symbol(), self.color())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * (Card::MAX_RANK - Card::MIN_RANK + 1) as usize;
