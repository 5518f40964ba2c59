//! Phases and the observer snapshot.

use serde::{Deserialize, Serialize};

use super::judger::TrickPlay;
use crate::cards::{Card, Suit};
use crate::core::{Action, PlayerId, PlayerMap};

/// Where the hand is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// First bidding round: order up the upcard or pass.
    BidRoundOne,
    /// Dealer holds six cards and must discard one.
    Discard,
    /// Second bidding round: name any suit but the turned-down one.
    BidRoundTwo,
    /// Trick play.
    Play,
    /// All five tricks are scored.
    Finished,
}

/// What happened to the upcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpcardDisposition {
    /// Still on offer in the first bidding round.
    #[default]
    Available,
    /// Everyone passed; its suit is barred from the second round.
    TurnedDown,
    /// Ordered into the dealer's hand.
    PickedUp,
}

impl UpcardDisposition {
    /// Flags in `[turned_down, picked_up]` form.
    #[must_use]
    pub fn flags(self) -> [bool; 2] {
        [
            self == UpcardDisposition::TurnedDown,
            self == UpcardDisposition::PickedUp,
        ]
    }
}

/// Owned view of the hand from one seat's perspective.
///
/// Built fresh for every call; nothing in it aliases engine state.
/// Only the observing seat's own cards are included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EuchreState {
    /// Seat this view was built for.
    pub player: PlayerId,
    /// That seat's cards, in canonical order.
    pub hand: Vec<Card>,
    pub phase: Phase,
    pub trump: Option<Suit>,
    pub dealer: PlayerId,
    pub calling_player: Option<PlayerId>,
    pub turned_down: Option<Suit>,
    pub lead_suit: Option<Suit>,
    pub upcard: Card,
    pub upcard_disposition: UpcardDisposition,
    /// Cards in the current trick, in play order.
    pub center: Vec<TrickPlay>,
    /// Cards each seat has played this hand, in order.
    pub played: PlayerMap<Vec<Card>>,
    /// Tricks each seat has taken.
    pub tricks_won: PlayerMap<u8>,
    pub current_player: PlayerId,
    /// Legal actions for `current_player`, in ordinal order.
    pub legal_actions: Vec<Action>,
}

impl EuchreState {
    /// Whether trump has been named.
    #[must_use]
    pub fn trump_called(&self) -> bool {
        self.trump.is_some()
    }

    /// Whether this view belongs to the seat that must act.
    #[must_use]
    pub fn is_own_turn(&self) -> bool {
        self.player == self.current_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_flags() {
        assert_eq!(UpcardDisposition::Available.flags(), [false, false]);
        assert_eq!(UpcardDisposition::TurnedDown.flags(), [true, false]);
        assert_eq!(UpcardDisposition::PickedUp.flags(), [false, true]);
        assert_eq!(UpcardDisposition::default(), UpcardDisposition::Available);
    }
}
