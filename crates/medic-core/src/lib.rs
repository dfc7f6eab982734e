//! medic-core
//!
//! Pure domain types for the algorithm browser: protocols, decision points,
//! control state and evaluation results. No I/O, no rendering. This is the
//! shared vocabulary of the other medic crates.

pub mod code;
pub mod error;
pub mod models;
