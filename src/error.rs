//! Error types for table operations.
//!
//! A rejected operation never changes the table. Callers that only want the
//! silent no-op behaviour can ignore the error.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when dealing a fresh hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("cannot deal {requested} cards, only {remaining} left in the deck")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards still in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when picking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// The card is not in the hand.
    #[error("card is not in the hand")]
    NotInHand,
    /// The hand position does not exist.
    #[error("hand position out of range")]
    OutOfRange,
}

/// Errors that can occur when tossing the selected card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TossError {
    /// No card is selected.
    #[error("no card is selected")]
    NoSelection,
}

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),
}

/// A rejected [`Intent`](crate::Intent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntentError {
    /// Draw was rejected.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Deal was rejected.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Pick was rejected.
    #[error(transparent)]
    Pick(#[from] PickError),
    /// Toss was rejected.
    #[error(transparent)]
    Toss(#[from] TossError),
}
