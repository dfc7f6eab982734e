pub mod category;
pub mod controls;
pub mod evaluation;
pub mod protocol;
