//! Deck construction, difficulty biasing, and dealing.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};

/// Point value above which a card counts as "high" for difficulty biasing.
const HIGH_VALUE_THRESHOLD: u8 = 10;

/// Point value at or below which a card counts as "low" for difficulty
/// biasing.
const LOW_VALUE_THRESHOLD: u8 = 5;

/// An ordered stack of cards. [`Deck::deal`] removes from the top (the end).
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top of the deck last.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds and shuffles a deck for the given difficulty level.
    ///
    /// Difficulty 0 yields exactly the standard 52-card suit/rank cross
    /// product. At difficulty `d`, `2 * d` uniformly-random high-value cards
    /// (value above 10) are added, each drawn fresh from the full high-value
    /// subset so duplicates are allowed, and then `2 * d` removals of a
    /// uniformly-random low-value card (value 5 or below) are attempted,
    /// stopping early once no low-value cards remain. The additions all
    /// complete before the removals start.
    #[must_use]
    pub fn new(difficulty: u8, rng: &mut ChaCha8Rng) -> Self {
        let extra = usize::from(difficulty) * 2;
        let mut cards = Vec::with_capacity(DECK_SIZE + extra);

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(suit, rank));
            }
        }

        if difficulty > 0 {
            let high_cards: Vec<Card> = cards
                .iter()
                .copied()
                .filter(|card| card.value() > HIGH_VALUE_THRESHOLD)
                .collect();

            for _ in 0..extra {
                cards.push(high_cards[rng.random_range(0..high_cards.len())]);
            }

            for _ in 0..extra {
                let low_indices: Vec<usize> = cards
                    .iter()
                    .enumerate()
                    .filter(|(_, card)| card.value() <= LOW_VALUE_THRESHOLD)
                    .map(|(index, _)| index)
                    .collect();

                if low_indices.is_empty() {
                    break;
                }
                cards.remove(low_indices[rng.random_range(0..low_indices.len())]);
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck with an explicit card order, top of the deck last.
    ///
    /// No shuffle is applied; this is the seam for deterministic setups.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
