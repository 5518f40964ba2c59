//! Rules engine trait and rollout helpers.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for the seat to act
//! - How actions advance the hand
//! - When the hand is over and what each seat scored
//!
//! `rollout` drives any engine to completion with a pluggable policy.

pub mod engine;
pub mod rollout;

pub use engine::{GameResult, RulesEngine};
pub use rollout::{play_out, Policy, Rollout, UniformRandom};
