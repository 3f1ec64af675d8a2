//! Table configuration options.

use alloc::vec;
use alloc::vec::Vec;

/// What happens when a card in the hand is picked while another card is
/// already selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum PickPolicy {
    /// The newly picked card replaces the selection.
    Select,
    /// The two cards trade places and the selection is cleared.
    #[default]
    Swap,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckhand::{PickPolicy, TableOptions};
///
/// let options = TableOptions::default()
///     .with_pick_policy(PickPolicy::Select)
///     .with_deal_sizes(vec![3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Pick behaviour when a second card is picked.
    pub pick_policy: PickPolicy,
    /// Deal sizes offered to the player.
    pub deal_sizes: Vec<usize>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            pick_policy: PickPolicy::Swap,
            deal_sizes: vec![5, 7],
        }
    }
}

impl TableOptions {
    /// Sets the pick policy.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{PickPolicy, TableOptions};
    ///
    /// let options = TableOptions::default().with_pick_policy(PickPolicy::Select);
    /// assert_eq!(options.pick_policy, PickPolicy::Select);
    /// ```
    #[must_use]
    pub fn with_pick_policy(mut self, policy: PickPolicy) -> Self {
        self.pick_policy = policy;
        self
    }

    /// Sets the deal sizes offered to the player.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::TableOptions;
    ///
    /// let options = TableOptions::default().with_deal_sizes(vec![2, 4]);
    /// assert_eq!(options.deal_sizes, vec![2, 4]);
    /// ```
    #[must_use]
    pub fn with_deal_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.deal_sizes = sizes;
        self
    }
}
