//! This module reimports commonly used types.

pub use crate::evaluation::{evaluate, evaluate_solution};
pub use crate::format::{ParseError, SolutionReader, ThopProblem};
pub use crate::models::{Instance, Solution, Verdict, Violation};
pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
