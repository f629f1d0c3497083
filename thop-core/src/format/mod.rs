//! Contains functionality to read instances and solutions in text formats and to write reports.
//!
//! # Instance format
//!
//! An instance is a header of `KEY: value` lines followed by node coordinates and items:
//!
//! ```text
//! PROBLEM NAME: a280-ThOP
//! KNAPSACK DATA TYPE: bounded strongly corr
//! DIMENSION: 280
//! NUMBER OF ITEMS: 279
//! CAPACITY OF KNAPSACK: 25936
//! MAX TIME: 2613
//! MIN SPEED: 0.1
//! MAX SPEED: 1
//! EDGE_WEIGHT_TYPE: CEIL_2D
//! NODE_COORD_SECTION (INDEX, X, Y):
//! 1 288 149
//! ...
//! ITEMS SECTION (INDEX, PROFIT, WEIGHT, ASSIGNED NODE NUMBER):
//! 1 101 1 2
//! ...
//! ```
//!
//! # Solution format
//!
//! A solution has two lines: visited intermediate cities and collected items. Each line is a list
//! of integers separated by commas and/or whitespace, optionally surrounded by square brackets:
//!
//! ```text
//! [2, 5, 3]
//! [1, 4]
//! ```

use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

mod instance_reader;
pub use self::instance_reader::ThopProblem;

mod instance_rewriter;
pub use self::instance_rewriter::*;

mod report;
pub use self::report::*;

mod solution_reader;
pub use self::solution_reader::SolutionReader;

/// An error which is returned when instance or solution text is malformed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// A description of the problem.
    pub cause: String,
    /// A 1-based line number where the problem was found, if known.
    pub line: Option<usize>,
}

impl ParseError {
    /// Creates a new instance of `ParseError` without line information.
    pub fn new(cause: impl Into<String>) -> Self {
        Self { cause: cause.into(), line: None }
    }

    /// Creates a new instance of `ParseError` which refers to the given line.
    pub fn at_line(line: usize, cause: impl Into<String>) -> Self {
        Self { cause: cause.into(), line: Some(line) }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for GenericError {
    fn from(value: ParseError) -> Self {
        GenericError::from(value.to_string())
    }
}
