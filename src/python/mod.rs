//! Python bindings for the Euchre engine.
//!
//! Built with the `python` feature. The game speaks string identifiers and
//! table ordinals, so learners can use whichever suits their encoder.
//!
//! # Quick Start
//!
//! ```python
//! import euchre_engine as euchre
//!
//! game = euchre.EuchreGame(seed=42)
//! state, player = game.init_game()
//!
//! while not game.is_over():
//!     mask = game.legal_action_mask()      # numpy float32, 54 entries
//!     state, player = game.step_id(int(mask.argmax()))
//!
//! print(game.payoffs())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// euchre_engine: a four-player Euchre rule engine.
///
/// Errors from invalid decks or illegal actions raise `ValueError`.
#[pymodule]
fn euchre_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyEuchreGame>()?;
    m.add("NUM_ACTIONS", <crate::core::Action as crate::core::ActionSpace>::COUNT)?;

    Ok(())
}
