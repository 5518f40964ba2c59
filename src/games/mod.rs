//! Game implementations.

pub mod euchre;
