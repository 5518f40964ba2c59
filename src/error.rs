//! Error types.
//!
//! Every failure the engine reports is a caller error: the same inputs
//! always produce the same error, and nothing is applied when one occurs.

use thiserror::Error;

use crate::cards::Card;
use crate::core::{Action, PlayerId};
use crate::games::euchre::Phase;

/// A scripted deck that cannot be turned into a 24-card Euchre deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckValidationError {
    #[error("scripted deck must list 24 cards, got {0}")]
    WrongLength(usize),

    #[error("malformed card code `{code}` at position {index}")]
    MalformedCode { index: usize, code: String },

    #[error("card {card} listed more than once (again at position {index})")]
    DuplicateCard { index: usize, card: Card },
}

/// An action that is not currently legal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidActionError {
    #[error("unknown action identifier `{0}`")]
    UnknownIdentifier(String),

    #[error("action ordinal {0} is outside the action table")]
    UnknownOrdinal(usize),

    #[error("`{action}` is not legal for {player} during {phase:?}")]
    NotLegal {
        action: Action,
        player: PlayerId,
        phase: Phase,
    },
}

/// Umbrella error for the game contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EuchreError {
    #[error(transparent)]
    Deck(#[from] DeckValidationError),

    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    #[error("custom dealer id {0} is not a seat at a four-player table")]
    InvalidDealer(u8),

    #[error("no hand in progress; call init_game first")]
    NotStarted,
}
