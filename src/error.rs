//! Error types for card construction and deck operations.

use thiserror::Error;

/// Broad category of a failure, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a value outside the accepted domain.
    InvalidArgument,
    /// The operation is not valid in the current state.
    IllegalState,
    /// A required external resource could not be obtained.
    UnavailableResource,
}

/// Errors that can occur while constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// No suit was supplied.
    #[error("suit must be non-null")]
    MissingSuit,
    /// The suit could not be recognized.
    #[error("unrecognized suit")]
    UnknownSuit,
    /// Rank is outside `1..=13`.
    #[error(
        "the value {0} is invalid. the rank must be between {min} and {max} inclusive",
        min = crate::card::Card::MIN_RANK,
        max = crate::card::Card::MAX_RANK
    )]
    InvalidRank(u8),
}

impl CardError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Tried to deal from a deck with no cards left.
    #[error("the deck is empty. can't deal from an empty deck")]
    Empty,
    /// The strong randomness source could not be initialized.
    #[error("no strong randomness source is available")]
    RandomUnavailable,
}

impl DeckError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::IllegalState,
            Self::RandomUnavailable => ErrorKind::UnavailableResource,
        }
    }
}
