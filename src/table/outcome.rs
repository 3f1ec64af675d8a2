//! Outcome types for table actions.

use crate::card::Card;

/// Result of picking a card in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picked {
    /// The card is now the selection.
    Selected(Card),
    /// The card was already selected and the selection was cleared.
    Cleared,
    /// The selected card and the picked card traded places.
    Swapped {
        /// Position of the previously selected card before the swap.
        from: usize,
        /// Position of the picked card before the swap.
        to: usize,
    },
}
