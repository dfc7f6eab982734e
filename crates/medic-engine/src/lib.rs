//! medic-engine
//!
//! One table-driven evaluator and presenter for every protocol sheet.
//! Control changes go in, panel visibility commands come out through a
//! [`presenter::Surface`]; nothing here owns a UI.

pub mod error;
pub mod evaluator;
pub mod navigation;
pub mod presenter;
pub mod session;
pub mod surface;
