//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{EuchreConfig, PlayerId};
use crate::games::euchre::{EuchreGame, EuchreState};
use crate::rules::RulesEngine;

use super::py_core::PyAction;

/// Python wrapper for EuchreGame.
///
/// States come back as plain dicts with card and action identifiers as
/// strings, so they can be logged or fed to an encoder directly.
#[pyclass(name = "EuchreGame")]
pub struct PyEuchreGame {
    game: EuchreGame,
}

fn seat(player: u8) -> PyResult<PlayerId> {
    PlayerId::try_new(player).ok_or_else(|| {
        pyo3::exceptions::PyValueError::new_err(format!("no seat {player} at a four-player table"))
    })
}

fn state_dict<'py>(py: Python<'py>, state: &EuchreState) -> PyResult<Bound<'py, PyDict>> {
    let codes = |cards: &[crate::cards::Card]| -> Vec<String> {
        cards.iter().map(ToString::to_string).collect()
    };

    let dict = PyDict::new_bound(py);
    dict.set_item("player", state.player.0)?;
    dict.set_item("hand", codes(&state.hand))?;
    dict.set_item("phase", format!("{:?}", state.phase))?;
    dict.set_item("trump", state.trump.map(|s| s.to_string()))?;
    dict.set_item("dealer", state.dealer.0)?;
    dict.set_item("calling_player", state.calling_player.map(|p| p.0))?;
    dict.set_item("turned_down", state.turned_down.map(|s| s.to_string()))?;
    dict.set_item("lead_suit", state.lead_suit.map(|s| s.to_string()))?;
    dict.set_item("upcard", state.upcard.to_string())?;
    dict.set_item("flipped", state.upcard_disposition.flags().to_vec())?;
    dict.set_item(
        "center",
        state
            .center
            .iter()
            .map(|play| (play.player.0, play.card.to_string()))
            .collect::<Vec<_>>(),
    )?;
    dict.set_item(
        "played",
        state.played.values().map(|cards| codes(cards)).collect::<Vec<_>>(),
    )?;
    dict.set_item("tricks_won", state.tricks_won.as_array().to_vec())?;
    dict.set_item("current_player", state.current_player.0)?;
    dict.set_item(
        "legal_actions",
        state
            .legal_actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    )?;
    Ok(dict)
}

#[pymethods]
impl PyEuchreGame {
    /// Create a game. Nothing is dealt until `init_game`.
    ///
    /// # Arguments
    /// - custom_deck: 24 card codes or "XX" wildcards, dealt unshuffled
    /// - custom_dealer_id: fixed dealer seat
    /// - seed: RNG seed for deterministic hands
    /// - allow_step_back: keep snapshots for `step_back`
    #[new]
    #[pyo3(signature = (
        custom_deck = None,
        custom_dealer_id = None,
        seed = None,
        allow_step_back = false
    ))]
    fn new(
        custom_deck: Option<Vec<String>>,
        custom_dealer_id: Option<u8>,
        seed: Option<u64>,
        allow_step_back: bool,
    ) -> PyResult<Self> {
        let config = EuchreConfig {
            custom_deck,
            custom_dealer_id,
            seed,
            allow_step_back,
        };
        Ok(Self {
            game: EuchreGame::new(config)?,
        })
    }

    /// Deal a fresh hand. Returns `(state, current_player)`.
    fn init_game<'py>(&mut self, py: Python<'py>) -> PyResult<(Bound<'py, PyDict>, u8)> {
        let (state, current) = self.game.init_game()?;
        Ok((state_dict(py, &state)?, current.0))
    }

    /// Apply an action by identifier. Returns `(state, current_player)`.
    fn step<'py>(&mut self, py: Python<'py>, action: &str) -> PyResult<(Bound<'py, PyDict>, u8)> {
        let (state, current) = self.game.step_str(action)?;
        Ok((state_dict(py, &state)?, current.0))
    }

    /// Apply an action by ordinal. Returns `(state, current_player)`.
    fn step_id<'py>(&mut self, py: Python<'py>, ordinal: usize) -> PyResult<(Bound<'py, PyDict>, u8)> {
        let (state, current) = RulesEngine::step_id(&mut self.game, ordinal)?;
        Ok((state_dict(py, &state)?, current.0))
    }

    /// Apply a wrapped action.
    fn step_action<'py>(
        &mut self,
        py: Python<'py>,
        action: &PyAction,
    ) -> PyResult<(Bound<'py, PyDict>, u8)> {
        let (state, current) = self.game.step(action.0)?;
        Ok((state_dict(py, &state)?, current.0))
    }

    /// Undo the last step; `False` if there is nothing to undo.
    fn step_back(&mut self) -> bool {
        self.game.step_back()
    }

    /// Legal action identifiers in ordinal order.
    fn legal_actions(&self) -> Vec<String> {
        self.game
            .get_legal_actions()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Legal action ordinals, ascending.
    fn legal_action_ids(&self) -> Vec<usize> {
        self.game.legal_action_ids()
    }

    /// 54-entry mask with 1.0 at legal ordinals.
    fn legal_action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        let mask: Vec<f32> = self
            .game
            .legal_action_mask()
            .into_iter()
            .map(|legal| if legal { 1.0 } else { 0.0 })
            .collect();
        PyArray1::from_slice_bound(py, &mask)
    }

    /// Payoff per seat; zeros until the hand is over.
    fn payoffs(&self) -> Vec<i32> {
        self.game.get_payoffs().as_array().to_vec()
    }

    fn is_over(&self) -> bool {
        self.game.is_over()
    }

    #[getter]
    fn current_player(&self) -> Option<u8> {
        self.game.current_player().map(|p| p.0)
    }

    #[getter]
    fn num_players(&self) -> usize {
        self.game.num_players()
    }

    #[getter]
    fn num_actions(&self) -> usize {
        self.game.num_actions()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.game.seed()
    }

    /// Snapshot from one seat's perspective.
    fn get_state<'py>(&self, py: Python<'py>, player: u8) -> PyResult<Bound<'py, PyDict>> {
        let state = self.game.get_state(seat(player)?)?;
        state_dict(py, &state)
    }

    /// Independent copy for lookahead.
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match (self.game.phase(), self.game.current_player()) {
            (None, _) => "undealt".to_string(),
            (Some(phase), Some(current)) => format!("{phase:?}, to act=P{}", current.0),
            (Some(phase), None) => format!("{phase:?}"),
        };
        format!("EuchreGame({status})")
    }
}
