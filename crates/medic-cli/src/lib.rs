//! medic-cli library root.
//!
//! Re-exports the command, shell, config and logging modules so integration tests
//! can drive them with in-memory input and output.

pub mod commands;
pub mod config;
pub mod logging;
pub mod sheet;
pub mod shell;
