//! Policies and a driver for playing hands to completion.
//!
//! - `Policy`: chooses one of the legal actions for the seat to act
//! - `UniformRandom`: picks uniformly among legal actions
//! - `play_out`: steps any engine until the hand is over

use crate::core::{GameRng, PlayerId, PlayerMap};

use super::engine::RulesEngine;

/// Chooses an action from a non-empty legal set.
pub trait Policy<E: RulesEngine> {
    fn choose(
        &mut self,
        engine: &E,
        player: PlayerId,
        legal: &[E::Action],
        rng: &mut GameRng,
    ) -> E::Action;
}

/// Uniform random policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl<E: RulesEngine> Policy<E> for UniformRandom {
    fn choose(
        &mut self,
        _engine: &E,
        _player: PlayerId,
        legal: &[E::Action],
        rng: &mut GameRng,
    ) -> E::Action {
        legal[rng.gen_range_usize(0..legal.len())]
    }
}

/// Summary of a finished rollout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rollout {
    /// Actions applied, in order.
    pub steps: usize,
    pub payoffs: PlayerMap<i32>,
}

/// Play the current hand to the end with one policy for every seat.
///
/// The engine must already be dealt. Each step picks from the engine's own
/// legal set, so an error here means the engine contradicted itself.
pub fn play_out<E, P>(engine: &mut E, policy: &mut P, rng: &mut GameRng) -> Result<Rollout, E::Error>
where
    E: RulesEngine,
    P: Policy<E>,
{
    let mut steps = 0;

    while !engine.is_over() {
        let Some(player) = engine.current_player() else {
            break;
        };
        let legal = engine.legal_actions();
        if legal.is_empty() {
            break;
        }

        let action = policy.choose(engine, player, &legal, rng);
        engine.step(action)?;
        steps += 1;
    }

    Ok(Rollout {
        steps,
        payoffs: engine.payoffs(),
    })
}
