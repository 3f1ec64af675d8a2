use log::{debug, trace};

use crate::card::Card;
use crate::error::{DealError, DrawError};

use super::Table;

impl Table {
    /// Draws one random card from the deck onto the end of the hand.
    ///
    /// Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let Some(card) = self.deck.draw_random(&mut self.rng) else {
            debug!("draw rejected: deck is empty");
            return Err(DrawError::EmptyDeck);
        };

        self.hand.add_card(card);
        self.selection = None;

        trace!("drew {card}, {} left in deck", self.deck.len());
        Ok(card)
    }

    /// Deals `count` random cards as a fresh hand.
    ///
    /// The previous hand is discarded, not returned to the deck. Clears the
    /// selection and returns the new hand.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `count` cards remain in the deck.
    pub fn deal(&mut self, count: usize) -> Result<&[Card], DealError> {
        let remaining = self.deck.len();
        let Some(cards) = self.deck.deal_random(count, &mut self.rng) else {
            debug!("deal of {count} rejected: {remaining} left in deck");
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        };

        let discarded = self.hand.len();
        self.hand.replace(cards);
        self.selection = None;

        trace!(
            "dealt {count}, discarded {discarded}, {} left in deck",
            self.deck.len()
        );
        Ok(self.hand.cards())
    }

    /// Restores the full deck and clears the hand and selection.
    pub fn reset(&mut self) {
        self.deck.refill();
        self.hand.clear();
        self.selection = None;

        trace!("table reset");
    }
}
