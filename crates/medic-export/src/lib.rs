//! medic-export
//!
//! Disposition notes: the answers given on a protocol sheet and the
//! resulting disposition, rendered from Tera templates.

pub mod error;
pub mod note;
pub mod render;
