//! User intents forwarded by a presentation layer.

use crate::card::Card;
use crate::error::IntentError;

use super::Table;

/// One user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Draw one card.
    Draw,
    /// Deal a fresh hand of the given size.
    Deal(usize),
    /// Start over with a full deck.
    Reset,
    /// Pick a card by value.
    Pick(Card),
    /// Pick the card at a hand position.
    PickAt(usize),
    /// Discard the selected card.
    Toss,
    /// Add a wildcard.
    Wildcard,
    /// Shuffle the hand.
    Regroup,
}

impl Table {
    /// Applies a single intent.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the underlying operation was rejected.
    /// The table is unchanged in that case.
    pub fn apply(&mut self, intent: Intent) -> Result<(), IntentError> {
        match intent {
            Intent::Draw => {
                self.draw()?;
            }
            Intent::Deal(count) => {
                self.deal(count)?;
            }
            Intent::Reset => self.reset(),
            Intent::Pick(card) => {
                self.pick(card)?;
            }
            Intent::PickAt(index) => {
                self.pick_at(index)?;
            }
            Intent::Toss => {
                self.toss()?;
            }
            Intent::Wildcard => {
                self.add_wildcard();
            }
            Intent::Regroup => self.regroup(),
        }

        Ok(())
    }
}
