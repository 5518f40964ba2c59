//! Deck construction: standard shuffled decks and scripted decks.
//!
//! A scripted deck lists all 24 positions of the deal, each either a card
//! code (`"HJ"`) or the wildcard `"XX"`. Explicit codes are validated as a
//! whole before any wildcard is resolved, so wildcards only ever draw from
//! cards nobody asked for by name.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;
use crate::error::DeckValidationError;

/// Token that stands for "any card not listed elsewhere".
pub const WILDCARD: &str = "XX";

/// One position of a scripted deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckToken {
    Card(Card),
    Wildcard,
}

/// A validated scripted deck, not yet resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedDeck {
    tokens: Vec<DeckToken>,
}

impl ScriptedDeck {
    /// Parse and validate 24 codes.
    ///
    /// Fails on a wrong length, a malformed code, or an explicit card that
    /// appears twice.
    pub fn parse<S: AsRef<str>>(codes: &[S]) -> Result<Self, DeckValidationError> {
        if codes.len() != Card::COUNT {
            return Err(DeckValidationError::WrongLength(codes.len()));
        }

        let mut seen = [false; Card::COUNT];
        let mut tokens = Vec::with_capacity(Card::COUNT);

        for (index, code) in codes.iter().enumerate() {
            let code = code.as_ref();
            if code == WILDCARD {
                tokens.push(DeckToken::Wildcard);
                continue;
            }

            let card: Card = code
                .parse()
                .map_err(|_| DeckValidationError::MalformedCode {
                    index,
                    code: code.to_string(),
                })?;
            if std::mem::replace(&mut seen[card.index()], true) {
                return Err(DeckValidationError::DuplicateCard { index, card });
            }
            tokens.push(DeckToken::Card(card));
        }

        Ok(Self { tokens })
    }

    /// The tokens in deal order.
    #[must_use]
    pub fn tokens(&self) -> &[DeckToken] {
        &self.tokens
    }

    /// Check whether any position is a wildcard.
    #[must_use]
    pub fn has_wildcards(&self) -> bool {
        self.tokens.contains(&DeckToken::Wildcard)
    }

    /// Turn the script into a concrete deck.
    ///
    /// Each wildcard, in list order, takes a uniformly random card from the
    /// ones not named explicitly.
    pub fn resolve(&self, rng: &mut GameRng) -> Deck {
        let mut named = [false; Card::COUNT];
        for token in &self.tokens {
            if let DeckToken::Card(card) = token {
                named[card.index()] = true;
            }
        }

        let mut pool: Vec<Card> = Deck::standard()
            .iter()
            .filter(|card| !named[card.index()])
            .collect();

        let cards = self
            .tokens
            .iter()
            .map(|token| match token {
                DeckToken::Card(card) => *card,
                DeckToken::Wildcard => {
                    let pick = rng.gen_range_usize(0..pool.len());
                    pool.swap_remove(pick)
                }
            })
            .collect();

        Deck { cards }
    }
}

/// Ordered cards, consumed front to back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// The 24 Euchre cards in suit-then-rank order, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A uniformly shuffled standard deck.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Self::standard().iter().collect();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Take the next card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Cards still in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the remaining cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

/// Build the deck for one hand.
///
/// With a script the deck is dealt exactly as listed (wildcards resolved
/// from `rng`); without one the standard deck is shuffled.
pub fn build_deck<S: AsRef<str>>(
    codes: Option<&[S]>,
    rng: &mut GameRng,
) -> Result<Deck, DeckValidationError> {
    match codes {
        Some(codes) => Ok(ScriptedDeck::parse(codes)?.resolve(rng)),
        None => Ok(Deck::shuffled(rng)),
    }
}
