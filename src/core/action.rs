//! Action representation and the stable ordinal table.
//!
//! Inside the engine an action is the enum [`Action`]. Learners that index
//! actions by integer use the fixed 54-entry table instead:
//!
//! | Ordinal | Identifier |
//! |---|---|
//! | 0 | `pass` |
//! | 1 | `pick` |
//! | 2..=5 | `call-H`, `call-D`, `call-S`, `call-C` |
//! | 6..=29 | `HA` .. `C9` (play a card) |
//! | 30..=53 | `discard-HA` .. `discard-C9` |
//!
//! Cards within the play and discard blocks follow [`Card::index`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::player::PlayerId;
use crate::cards::{Card, Suit};
use crate::error::InvalidActionError;

/// A move in the game.
///
/// ## Example
///
/// ```
/// use euchre_engine::core::{Action, ActionSpace};
///
/// let action: Action = "discard-D9".parse().unwrap();
/// assert_eq!(action.ordinal(), 41);
/// assert_eq!(Action::from_ordinal(41), Some(action));
/// assert_eq!(action.to_string(), "discard-D9");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Decline to name trump.
    Pass,
    /// Order the upcard into the dealer's hand, making its suit trump.
    Pick,
    /// Name a trump suit in the second bidding round.
    Call(Suit),
    /// Play a card to the current trick.
    Play(Card),
    /// Dealer discards after picking up the upcard.
    Discard(Card),
}

/// Integer view of an action vocabulary.
pub trait ActionSpace: Sized {
    /// Size of the vocabulary.
    const COUNT: usize;

    /// Stable index of this action.
    fn ordinal(&self) -> usize;

    /// Inverse of [`ActionSpace::ordinal`].
    fn from_ordinal(ordinal: usize) -> Option<Self>;
}

const CALL_BASE: usize = 2;
const PLAY_BASE: usize = CALL_BASE + 4;
const DISCARD_BASE: usize = PLAY_BASE + Card::COUNT;

impl ActionSpace for Action {
    const COUNT: usize = DISCARD_BASE + Card::COUNT;

    fn ordinal(&self) -> usize {
        match *self {
            Action::Pass => 0,
            Action::Pick => 1,
            Action::Call(suit) => CALL_BASE + suit.index(),
            Action::Play(card) => PLAY_BASE + card.index(),
            Action::Discard(card) => DISCARD_BASE + card.index(),
        }
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Action::Pass),
            1 => Some(Action::Pick),
            o if o < PLAY_BASE => Some(Action::Call(Suit::ALL[o - CALL_BASE])),
            o if o < DISCARD_BASE => Card::from_index(o - PLAY_BASE).map(Action::Play),
            o => Card::from_index(o - DISCARD_BASE).map(Action::Discard),
        }
    }
}

impl Action {
    /// Look up an ordinal, failing with an action error.
    pub fn try_from_ordinal(ordinal: usize) -> Result<Self, InvalidActionError> {
        Self::from_ordinal(ordinal).ok_or(InvalidActionError::UnknownOrdinal(ordinal))
    }

    /// Every action in ordinal order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..Self::COUNT).filter_map(Self::from_ordinal)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pass => write!(f, "pass"),
            Action::Pick => write!(f, "pick"),
            Action::Call(suit) => write!(f, "call-{suit}"),
            Action::Play(card) => write!(f, "{card}"),
            Action::Discard(card) => write!(f, "discard-{card}"),
        }
    }
}

impl FromStr for Action {
    type Err = InvalidActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || InvalidActionError::UnknownIdentifier(s.to_string());

        match s {
            "pass" => return Ok(Action::Pass),
            "pick" => return Ok(Action::Pick),
            _ => {}
        }

        if let Some(code) = s.strip_prefix("call-") {
            let mut chars = code.chars();
            return match (chars.next().and_then(Suit::from_code), chars.next()) {
                (Some(suit), None) => Ok(Action::Call(suit)),
                _ => Err(unknown()),
            };
        }

        if let Some(code) = s.strip_prefix("discard-") {
            return code.parse().map(Action::Discard).map_err(|_| unknown());
        }

        s.parse().map(Action::Play).map_err(|_| unknown())
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replaying a hand and for reconstructing what each seat did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Position of this action within the hand, starting at 0.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
