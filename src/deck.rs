//! Deck abstraction and its array-backed implementation.

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;
use crate::random::{RandomSource, SecureRandom};

const RANKS: usize = DECK_SIZE / Suit::ALL.len();

/// Operations supported by a deck of playing cards.
pub trait Deck {
    /// Restores the deck to all 52 cards and randomly permutes them.
    ///
    /// Any cards left from a previous deal are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::RandomUnavailable`] if no randomness source can
    /// be obtained. The deck is then left empty, not full in sorted order,
    /// so nothing can be dealt until a later shuffle succeeds.
    fn shuffle(&mut self) -> Result<(), DeckError>;

    /// Removes and returns the card at the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there are no cards left.
    fn deal_one_card(&mut self) -> Result<Card, DeckError>;

    /// Returns `true` if the deck has no cards left.
    fn is_empty(&self) -> bool;

    /// Returns the number of cards left in the deck.
    fn size(&self) -> usize;
}

/// A deck backed by a fixed array and a stack pointer.
///
/// The first [`size`](Deck::size) slots hold the undealt cards. Dealing
/// moves the pointer down without touching the slot.
///
/// ```
/// use deckrs::{ArrayDeck, Deck};
///
/// let mut deck = ArrayDeck::new().unwrap();
/// assert_eq!(deck.size(), 52);
///
/// let card = deck.deal_one_card().unwrap();
/// assert_eq!(deck.size(), 51);
/// assert!(!deck.cards().contains(&card));
/// ```
#[derive(Debug)]
pub struct ArrayDeck<S = SecureRandom> {
    /// Backing buffer.
    cards: [Card; DECK_SIZE],
    /// Number of undealt cards.
    size: usize,
    /// Source used to permute the cards.
    source: S,
}

impl ArrayDeck {
    /// Creates a full, shuffled deck using the operating system's entropy.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::RandomUnavailable`] if the operating system
    /// cannot seed the generator.
    pub fn new() -> Result<Self, DeckError> {
        Self::with_source(SecureRandom::new())
    }
}

impl<S: RandomSource> ArrayDeck<S> {
    /// Creates a full deck shuffled with the given source.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::RandomUnavailable`] if `source` fails while
    /// shuffling.
    pub fn with_source(source: S) -> Result<Self, DeckError> {
        log::debug!("creating a deck of {DECK_SIZE} cards");
        let mut deck = Self {
            cards: ordered_cards(),
            size: 0,
            source,
        };
        deck.shuffle()?;
        Ok(deck)
    }

    /// Returns the undealt cards. The last element is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.size]
    }

    /// Returns the randomness source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the deck and returns its randomness source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Puts every card back in suit-major, rank-ascending order.
    fn restore(&mut self) {
        self.cards = ordered_cards();
        self.size = DECK_SIZE;
        log::debug!("deck restored with its {} cards in order", self.size);
    }

    /// Swaps each position with one drawn from the whole deck.
    fn permute(&mut self) -> Result<(), DeckError> {
        for i in 0..self.size {
            let j = self.source.index(self.size)?;
            log::trace!("exchanging card at position {i} with {j}");
            self.cards.swap(i, j);
        }
        Ok(())
    }
}

impl<S: RandomSource> Deck for ArrayDeck<S> {
    fn shuffle(&mut self) -> Result<(), DeckError> {
        log::trace!("shuffle start");
        self.restore();
        if let Err(err) = self.permute() {
            // A half-permuted deck must not be dealt from.
            self.size = 0;
            return Err(err);
        }
        log::trace!("shuffle end");
        Ok(())
    }

    fn deal_one_card(&mut self) -> Result<Card, DeckError> {
        if self.size == 0 {
            return Err(DeckError::Empty);
        }
        self.size -= 1;
        let card = self.cards[self.size];
        log::debug!("dealt {card}, {} cards left in the deck", self.size);
        Ok(card)
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn size(&self) -> usize {
        self.size
    }
}

fn ordered_cards() -> [Card; DECK_SIZE] {
    core::array::from_fn(|i| {
        let suit = Suit::ALL[i / RANKS];
        Card::new_unchecked(Card::MIN_RANK + (i % RANKS) as u8, suit)
    })
}
