//! The cards currently on display.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// An ordered sequence of drawn cards.
///
/// Unlike [`Deck`](crate::Deck), a hand may hold the same card more than
/// once, since wildcards bypass the deck. Every lookup matches by value and
/// acts on the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in display order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the position of the first card equal to `card`.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Returns whether the hand holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replaces the whole hand.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Clears the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Removes the first card equal to `card`.
    pub fn remove_first(&mut self, card: &Card) -> Option<Card> {
        let index = self.position(card)?;
        Some(self.cards.remove(index))
    }

    /// Exchanges the first card equal to `a` with the first card equal to `b`.
    ///
    /// Returns the two positions, or `None` if either card is missing.
    pub fn swap_first(&mut self, a: &Card, b: &Card) -> Option<(usize, usize)> {
        let from = self.position(a)?;
        let to = self.position(b)?;
        self.cards.swap(from, to);
        Some((from, to))
    }

    /// Puts the cards in a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}
