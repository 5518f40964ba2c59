//! Dealing a hand.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::cards::{Card, Deck, ScriptedDeck};
use crate::core::{GameRng, PlayerId, PlayerMap, NUM_PLAYERS};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 5;

/// Owns the deck for one hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    deck: Deck,
}

impl Dealer {
    /// Prepare the deck: the script as given, or a shuffled standard deck.
    pub fn new(script: Option<&ScriptedDeck>, rng: &mut GameRng) -> Self {
        let deck = match script {
            Some(script) => script.resolve(rng),
            None => Deck::shuffled(rng),
        };
        Self { deck }
    }

    /// Deal five cards to each seat, starting left of the dealer.
    ///
    /// Each seat receives a consecutive block of the deck, so positions 0-4
    /// go left of the dealer and 15-19 to the dealer.
    pub fn deal(&mut self, players: &mut PlayerMap<Player>, dealer: PlayerId) {
        for offset in 1..=NUM_PLAYERS as u8 {
            let seat = dealer.offset(offset);
            for _ in 0..HAND_SIZE {
                if let Some(card) = self.deck.draw() {
                    players[seat].receive(card);
                }
            }
        }
    }

    /// Turn up the next card.
    pub fn flip_upcard(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    /// Undealt cards.
    #[must_use]
    pub fn remaining(&self) -> &Deck {
        &self.deck
    }
}
