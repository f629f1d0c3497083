//! Module provides various helper functionality.

pub mod check;
pub mod draw;
pub mod experiment;
pub mod generate;
