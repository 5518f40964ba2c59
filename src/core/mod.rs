//! Core engine types: seats, actions, configuration, RNG.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, ActionSpace};
pub use config::EuchreConfig;
pub use player::{PlayerId, PlayerMap, Team, NUM_PLAYERS};
pub use rng::GameRng;
