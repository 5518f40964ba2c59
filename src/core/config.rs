//! Game configuration.
//!
//! `EuchreConfig` controls how each hand is set up. All fields are optional;
//! the default is a shuffled standard deck with a random dealer.
//!
//! Configurations are plain serde data, so they can be loaded from JSON:
//!
//! ```
//! use euchre_engine::core::EuchreConfig;
//!
//! let config = EuchreConfig::new().with_dealer(1).with_seed(7);
//! assert_eq!(config.custom_dealer_id, Some(1));
//! assert_eq!(config.seed, Some(7));
//! ```

use serde::{Deserialize, Serialize};

/// Hand setup options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EuchreConfig {
    /// Scripted deck: 24 card codes or `XX` wildcards, dealt without
    /// shuffling. `None` deals a shuffled standard deck.
    pub custom_deck: Option<Vec<String>>,

    /// Fixed dealer seat. `None` picks a dealer at random each hand.
    pub custom_dealer_id: Option<u8>,

    /// Seed for shuffling, wildcard resolution and dealer choice.
    /// `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Keep a snapshot before every step so it can be undone.
    pub allow_step_back: bool,
}

impl EuchreConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal from a scripted deck.
    #[must_use]
    pub fn with_custom_deck<S: Into<String>>(mut self, codes: impl IntoIterator<Item = S>) -> Self {
        self.custom_deck = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Fix the dealer seat.
    #[must_use]
    pub fn with_dealer(mut self, dealer: u8) -> Self {
        self.custom_dealer_id = Some(dealer);
        self
    }

    /// Seed all randomness.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable `step_back`.
    #[must_use]
    pub fn with_step_back(mut self) -> Self {
        self.allow_step_back = true;
        self
    }
}
