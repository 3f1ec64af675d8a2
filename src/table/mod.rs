//! Table engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::TableOptions;

mod actions;
mod deal;
pub mod intent;
pub mod outcome;
pub mod view;

pub use intent::Intent;
pub use outcome::Picked;
pub use view::{DealButton, HandSlot, TableView};

/// A single-player card table: the deck, the hand on display, and the
/// currently selected card.
///
/// Every operation takes `&mut self` and either applies in full or is
/// rejected with the table left exactly as it was. Use [`TableOptions`] to
/// configure how picking behaves.
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards not yet drawn.
    deck: Deck,
    /// Cards on display.
    hand: Hand,
    /// Currently selected card. Always present in `hand` when set.
    selection: Option<Card>,
    /// Table options.
    options: TableOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with a full deck and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            deck: Deck::full(),
            hand: Hand::new(),
            selection: None,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a table with an explicit deck and hand and no selection.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` holds the same card twice.
    pub fn with_cards(
        options: TableOptions,
        seed: u64,
        deck: Vec<Card>,
        hand: Vec<Card>,
    ) -> Result<Self, DeckError> {
        Ok(Self {
            deck: Deck::from_cards(deck)?,
            hand: Hand::from_cards(hand),
            selection: None,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the undrawn cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the cards on display.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<Card> {
        self.selection
    }

    /// Returns whether `card` matches the selection.
    #[must_use]
    pub fn is_selected(&self, card: &Card) -> bool {
        self.selection.as_ref() == Some(card)
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }
}
