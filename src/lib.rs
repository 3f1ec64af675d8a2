//! A deck-of-cards hand state machine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that owns a 52-card deck, the hand of
//! drawn cards, and the current selection. Cards are drawn or dealt from the
//! deck, picked, swapped, tossed, joined by wildcards, and regrouped.
//!
//! # Example
//!
//! ```
//! use deckhand::{Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.deal(5).unwrap();
//! assert_eq!(table.hand().len(), 5);
//! assert_eq!(table.cards_remaining(), 47);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use deck::Deck;
pub use error::{DealError, DeckError, DrawError, IntentError, PickError, TossError};
pub use hand::Hand;
pub use options::{PickPolicy, TableOptions};
pub use table::{DealButton, HandSlot, Intent, Picked, Table, TableView};
