//! Rules engine trait for game implementations.
//!
//! A game implements `RulesEngine` to expose the driver contract:
//! - What actions are legal for the seat to act
//! - How an action advances the hand
//! - When the hand is over and what each seat scored
//!
//! Provided methods add the integer view used by learners that index
//! actions by ordinal.

use crate::core::{ActionSpace, PlayerId, PlayerMap, NUM_PLAYERS};
use crate::error::InvalidActionError;

/// Result of a completed hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
    /// Multiple winners (a partnership).
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty when nobody can act (before the first deal,
///   or once the hand is over)
/// - `step`: must reject anything outside `legal_actions` without applying it
/// - `step`: must be deterministic given the configured deck and seed
pub trait RulesEngine {
    /// Action vocabulary.
    type Action: ActionSpace + Copy + Eq + std::fmt::Debug;

    /// Observer snapshot returned after every transition.
    type State;

    /// Failure type for the driver contract.
    type Error: std::error::Error + From<InvalidActionError>;

    /// Deal a fresh hand.
    fn init_game(&mut self) -> Result<(Self::State, PlayerId), Self::Error>;

    /// Apply one action for the seat to act.
    fn step(&mut self, action: Self::Action) -> Result<(Self::State, PlayerId), Self::Error>;

    /// Legal actions for the seat to act, in ordinal order.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Seat to act, if a hand is in progress.
    fn current_player(&self) -> Option<PlayerId>;

    /// Whether the hand has been scored.
    fn is_over(&self) -> bool;

    /// Per-seat payoffs; all zero until the hand is over.
    fn payoffs(&self) -> PlayerMap<i32>;

    // === Convenience Methods ===

    /// Seats at the table.
    fn num_players(&self) -> usize {
        NUM_PLAYERS
    }

    /// Size of the action vocabulary.
    fn num_actions(&self) -> usize {
        Self::Action::COUNT
    }

    /// Legal actions as ordinals.
    fn legal_action_ids(&self) -> Vec<usize> {
        self.legal_actions().iter().map(ActionSpace::ordinal).collect()
    }

    /// Legal actions as a dense mask over the whole vocabulary.
    fn legal_action_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; Self::Action::COUNT];
        for ordinal in self.legal_action_ids() {
            mask[ordinal] = true;
        }
        mask
    }

    /// Apply an action given by ordinal.
    fn step_id(&mut self, ordinal: usize) -> Result<(Self::State, PlayerId), Self::Error> {
        let action =
            Self::Action::from_ordinal(ordinal).ok_or(InvalidActionError::UnknownOrdinal(ordinal))?;
        self.step(action)
    }

    /// Winners of a finished hand, `None` while it is still being played.
    fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        let winners: Vec<PlayerId> = self
            .payoffs()
            .iter()
            .filter(|(_, payoff)| **payoff > 0)
            .map(|(player, _)| player)
            .collect();

        match winners.len() {
            0 => Some(GameResult::Draw),
            1 => Some(GameResult::Winner(winners[0])),
            _ => Some(GameResult::Winners(winners)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));

        let team = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(team.is_winner(PlayerId::new(0)));
        assert!(!team.is_winner(PlayerId::new(1)));
        assert!(team.is_winner(PlayerId::new(2)));
    }
}
