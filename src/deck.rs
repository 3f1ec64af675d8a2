//! The pool of undrawn cards.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::index;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, standard_deck};
use crate::error::DeckError;

/// Undrawn cards.
///
/// A deck never holds the same card twice. Cards only leave the deck; the
/// only way to put them back is [`Deck::refill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in standard order.
    #[must_use]
    pub fn full() -> Self {
        Self {
            cards: standard_deck(),
        }
    }

    /// Creates a deck holding exactly the given cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(*card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Restores all 52 cards.
    pub fn refill(&mut self) {
        self.cards = standard_deck();
    }

    /// Removes and returns one card chosen uniformly at random.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(index))
    }

    /// Removes and returns `count` distinct cards chosen uniformly at random.
    ///
    /// The returned cards are in random order. Returns `None` and leaves the
    /// deck untouched if fewer than `count` cards remain.
    pub fn deal_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Option<Vec<Card>> {
        if self.cards.len() < count {
            return None;
        }

        let dealt: Vec<Card> = index::sample(rng, self.cards.len(), count)
            .iter()
            .map(|i| self.cards[i])
            .collect();

        let taken: HashSet<Card> = dealt.iter().copied().collect();
        self.cards.retain(|card| !taken.contains(card));

        Some(dealt)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}
