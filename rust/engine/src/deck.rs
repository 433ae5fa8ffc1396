use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card deck with a seeded shuffle, so dealt pools are reproducible.
/// Cards are dealt from the front; dealt cards stay visible through
/// [`Deck::dealt`] until the next shuffle or reset.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Deck {
    /// An unshuffled deck in id order whose shuffles are driven by `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            next: 0,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Gathers every card back and shuffles. Successive shuffles continue
    /// the same random stream.
    pub fn shuffle(&mut self) {
        self.reset();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let card = *self.cards.get(self.next)?;
        self.next += 1;
        Some(card)
    }

    /// Deals `n` cards, or nothing if fewer than `n` remain.
    pub fn deal_pool(&mut self, n: usize) -> Option<Vec<Card>> {
        let pool = self.cards.get(self.next..self.next + n)?.to_vec();
        self.next += n;
        Some(pool)
    }

    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.next]
    }

    /// Back to id order; the random stream is not rewound.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.next = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}
