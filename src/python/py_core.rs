//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, ActionSpace, PlayerId};
use crate::error::EuchreError;

impl From<EuchreError> for PyErr {
    fn from(err: EuchreError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a seat id; fails outside 0-3.
    #[new]
    fn new(id: u8) -> PyResult<Self> {
        PlayerId::try_new(id)
            .map(Self)
            .ok_or_else(|| PyValueError::new_err(format!("no seat {id} at a four-player table")))
    }

    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    /// Seat across the table.
    fn partner(&self) -> Self {
        Self(self.0.partner())
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Parse an identifier such as `"pick"`, `"call-S"`, `"HA"` or `"discard-D9"`.
    #[new]
    fn new(identifier: &str) -> PyResult<Self> {
        let action = identifier.parse::<Action>().map_err(EuchreError::from)?;
        Ok(Self(action))
    }

    /// Look up an action by its position in the 54-entry table.
    #[staticmethod]
    fn from_ordinal(ordinal: usize) -> PyResult<Self> {
        let action = Action::try_from_ordinal(ordinal).map_err(EuchreError::from)?;
        Ok(Self(action))
    }

    #[getter]
    fn ordinal(&self) -> usize {
        self.0.ordinal()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Action({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.ordinal() as u64
    }
}
