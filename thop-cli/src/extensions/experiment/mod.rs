//! An experiment runner: executes an external solver over a grid of benchmark instances,
//! parameter configurations and random seeds using a bounded pool of workers.

pub mod config;
pub use self::config::*;

mod plan;
pub use self::plan::*;

mod runner;
pub use self::runner::*;
