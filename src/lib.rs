//! A standard 52-card playing-card deck with optional `no_std` support.
//!
//! The crate provides immutable [`Card`] values and an [`ArrayDeck`] that can
//! be shuffled back to a full deck at any time and dealt from one card at a
//! time.
//!
//! # Example
//!
//! ```
//! use deckrs::{ArrayDeck, Deck};
//!
//! let mut deck = ArrayDeck::new().unwrap();
//! while !deck.is_empty() {
//!     let card = deck.deal_one_card().unwrap();
//!     let _ = card;
//! }
//! deck.shuffle().unwrap();
//! assert_eq!(deck.size(), 52);
//! ```
//!
//! Shuffles draw from [`SecureRandom`] unless another [`RandomSource`] is
//! supplied. Any seeded [`rand::RngCore`] works:
//!
//! ```
//! use deckrs::{ArrayDeck, Deck};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let deck = ArrayDeck::with_source(ChaCha8Rng::seed_from_u64(42)).unwrap();
//! assert_eq!(deck.size(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod random;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use deck::{ArrayDeck, Deck};
pub use error::{CardError, DeckError, ErrorKind};
pub use random::{RandomSource, SecureRandom};
