use log::{debug, trace};
use rand::Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::{PickError, TossError};
use crate::options::PickPolicy;

use super::{Picked, Table};

impl Table {
    /// Picks a card in the hand.
    ///
    /// Picking the selected card again clears the selection. Otherwise the
    /// outcome depends on [`PickPolicy`]: with `Select` the picked card
    /// becomes the selection; with `Swap` the first card equal to the
    /// selection and the first card equal to `card` trade places and the
    /// selection is cleared. With nothing selected, both policies select.
    ///
    /// # Errors
    ///
    /// Returns an error if no card in the hand equals `card`.
    pub fn pick(&mut self, card: Card) -> Result<Picked, PickError> {
        if !self.hand.contains(&card) {
            debug!("pick of {card} rejected: not in hand");
            return Err(PickError::NotInHand);
        }

        let picked = match (self.selection, self.options.pick_policy) {
            (Some(selected), _) if selected == card => {
                self.selection = None;
                Picked::Cleared
            }
            (Some(selected), PickPolicy::Swap) => {
                if let Some((from, to)) = self.hand.swap_first(&selected, &card) {
                    self.selection = None;
                    Picked::Swapped { from, to }
                } else {
                    // Selection fell out of the hand; treat as a fresh pick.
                    self.selection = Some(card);
                    Picked::Selected(card)
                }
            }
            _ => {
                self.selection = Some(card);
                Picked::Selected(card)
            }
        };

        trace!("picked {card}: {picked:?}");
        Ok(picked)
    }

    /// Picks the card at `index` in the hand.
    ///
    /// See [`Table::pick`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the hand.
    pub fn pick_at(&mut self, index: usize) -> Result<Picked, PickError> {
        let card = self.hand.get(index).ok_or(PickError::OutOfRange)?;
        self.pick(card)
    }

    /// Discards the selected card.
    ///
    /// Removes the first card in the hand equal to the selection. The card is
    /// not returned to the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected.
    pub fn toss(&mut self) -> Result<Card, TossError> {
        let Some(selected) = self.selection.take() else {
            debug!("toss rejected: nothing selected");
            return Err(TossError::NoSelection);
        };

        self.hand.remove_first(&selected);

        trace!("tossed {selected}, {} left in hand", self.hand.len());
        Ok(selected)
    }

    /// Appends a random card that does not come from the deck.
    ///
    /// Suit and rank are chosen independently, so the wildcard may duplicate a
    /// card in the hand or the deck. The deck and selection are untouched.
    pub fn add_wildcard(&mut self) -> Card {
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        let rank = Rank::ALL[self.rng.random_range(0..Rank::ALL.len())];
        let card = Card::new(suit, rank);

        self.hand.add_card(card);

        trace!("added wildcard {card}");
        card
    }

    /// Puts the hand in a random order.
    ///
    /// The deck and selection are untouched.
    pub fn regroup(&mut self) {
        self.hand.shuffle(&mut self.rng);

        trace!("regrouped {} cards", self.hand.len());
    }
}
