//! A seat's hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::PlayerId;

/// Cards held by one seat. At most six (the dealer after a pick).
pub type Hand = SmallVec<[Card; 6]>;

/// One seat and the cards it holds.
///
/// The hand is kept in canonical order (action-table order) so every
/// observer sees the same sequence regardless of how cards arrived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Add a card and restore canonical order.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
        self.sort_hand();
    }

    /// Remove a card if held.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let position = self.hand.iter().position(|&c| c == card)?;
        Some(self.hand.remove(position))
    }

    /// Sort by action-table position.
    pub fn sort_hand(&mut self) {
        self.hand.sort_unstable_by_key(|card| card.index());
    }
}
