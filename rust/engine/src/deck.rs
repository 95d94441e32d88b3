use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Source of randomness for dealing. Implementations must produce a uniformly
/// random permutation of the slice they are given.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// ChaCha20-backed shuffler; the same seed always yields the same sequence of decks.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// A standard 52-card deck dealt from the front.
///
/// # Examples
///
/// ```
/// use showdown_engine::deck::{Deck, SeededShuffler};
///
/// let mut deck = Deck::new();
/// deck.shuffle_with(&mut SeededShuffler::new(42));
/// let hole = deck.draw(2).unwrap();
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.remaining(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in dealing order
    cards: Vec<Card>,
    /// Index of the next card to deal
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Canonical, unshuffled deck.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// Shuffles the cards that have not been dealt yet.
    pub fn shuffle_with(&mut self, shuffler: &mut dyn Shuffler) {
        shuffler.shuffle(&mut self.cards[self.position..]);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Draws `n` cards from the front, or none at all if fewer than `n` remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
