//! Render snapshots of a table.

use alloc::vec::Vec;

use crate::card::Card;

use super::Table;

/// A card on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSlot {
    /// The card.
    pub card: Card,
    /// Whether the card matches the selection.
    pub selected: bool,
}

/// A configured deal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealButton {
    /// Number of cards dealt.
    pub size: usize,
    /// Whether the deck holds enough cards.
    pub enabled: bool,
}

/// Everything a presentation layer needs to render the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Number of cards left in the deck.
    pub cards_remaining: usize,
    /// Whether a card can be drawn.
    pub can_draw: bool,
    /// Deal sizes and whether each is available.
    pub deals: Vec<DealButton>,
    /// Whether a card is selected and can be tossed.
    pub can_toss: bool,
    /// Whether the hand holds any cards to regroup.
    pub can_regroup: bool,
    /// The selected card.
    pub selection: Option<Card>,
    /// The hand in display order.
    pub hand: Vec<HandSlot>,
}

impl Table {
    /// Returns a snapshot of the table for rendering.
    #[must_use]
    pub fn view(&self) -> TableView {
        let cards_remaining = self.deck.len();

        let deals = self
            .options
            .deal_sizes
            .iter()
            .map(|&size| DealButton {
                size,
                enabled: cards_remaining >= size,
            })
            .collect();

        let hand = self
            .hand
            .cards()
            .iter()
            .map(|card| HandSlot {
                card: *card,
                selected: self.is_selected(card),
            })
            .collect();

        TableView {
            cards_remaining,
            can_draw: cards_remaining > 0,
            deals,
            can_toss: self.selection.is_some(),
            can_regroup: !self.hand.is_empty(),
            selection: self.selection,
            hand,
        }
    }
}
