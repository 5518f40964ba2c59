//! # euchre-engine
//!
//! A four-player Euchre rule engine for reinforcement-learning environments.
//!
//! ## Design Principles
//!
//! 1. **Driver Contract**: `init_game`, `get_legal_actions`, `step`,
//!    `is_over`, `get_payoffs`. Nothing else is needed to play a hand.
//!
//! 2. **Stable Action Table**: 54 actions with fixed ordinals, so learners
//!    can index policy outputs and legal masks directly.
//!
//! 3. **Reproducible Hands**: scripted decks (with `XX` wildcards) and a
//!    seeded ChaCha8 RNG make every hand replayable.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: played history and the action log use
//!   `im-rs` vectors so step-back snapshots are cheap to clone.
//!
//! - **Owned Observations**: `get_state` builds a fresh `EuchreState` per
//!   call; callers can keep it across steps.
//!
//! ## Modules
//!
//! - `core`: seats, actions, configuration, RNG
//! - `cards`: suits, ranks, bower rules, decks
//! - `games::euchre`: dealer, players, judger, and the hand state machine
//! - `rules`: `RulesEngine` trait and rollout helpers
//! - `error`: deck and action errors
//! - `python`: PyO3 bindings (feature `python`)

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Action, ActionRecord, ActionSpace, EuchreConfig, GameRng, PlayerId, PlayerMap, Team};

pub use crate::cards::{Card, Rank, ScriptedDeck, Suit};

pub use crate::error::{DeckValidationError, EuchreError, InvalidActionError};

pub use crate::games::euchre::{EuchreGame, EuchreState, HandOutcome, Phase};

pub use crate::rules::{play_out, GameResult, Policy, RulesEngine, UniformRandom};
