//! Helpers shared by the integration tests.

use deckhand::Card;

/// Returns the cards in suit-then-rank order, for multiset comparisons.
pub fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_unstable();
    cards
}
