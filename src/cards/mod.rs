//! Card model: suits, ranks, bower rules, and deck construction.

pub mod card;
pub mod deck;

pub use card::{effective_suit, trick_strength, trump_rank, Card, ParseCardError, Rank, Suit};
pub use deck::{build_deck, Deck, DeckToken, ScriptedDeck, WILDCARD};
