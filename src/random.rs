//! Randomness sources used to shuffle a deck.

use core::fmt;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::DeckError;

/// A source of uniformly distributed indices.
///
/// Every [`RngCore`] is a source, so a seeded generator can stand in for
/// [`SecureRandom`] wherever a reproducible shuffle is needed.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// `bound` is never zero.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::RandomUnavailable`] if the source cannot produce
    /// a value.
    fn index(&mut self, bound: usize) -> Result<usize, DeckError>;
}

impl<R: RngCore> RandomSource for R {
    fn index(&mut self, bound: usize) -> Result<usize, DeckError> {
        Ok(self.random_range(0..bound))
    }
}

/// Cryptographically strong source seeded from the operating system.
///
/// The generator is seeded on the first draw and reused afterwards.
#[derive(Default)]
pub struct SecureRandom {
    rng: Option<ChaCha20Rng>,
}

impl SecureRandom {
    /// Creates a source that has not been seeded yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { rng: None }
    }

    /// Returns whether the generator has been seeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.rng.is_some()
    }

    fn generator(&mut self) -> Result<&mut ChaCha20Rng, DeckError> {
        if self.rng.is_none() {
            log::debug!("seeding ChaCha20 from the operating system");
            let rng = ChaCha20Rng::try_from_os_rng().map_err(|err| {
                log::error!("operating system entropy unavailable: {err}");
                DeckError::RandomUnavailable
            })?;
            self.rng = Some(rng);
        }
        self.rng.as_mut().ok_or(DeckError::RandomUnavailable)
    }
}

impl RandomSource for SecureRandom {
    fn index(&mut self, bound: usize) -> Result<usize, DeckError> {
        Ok(self.generator()?.random_range(0..bound))
    }
}

impl fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureRandom")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
