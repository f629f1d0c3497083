#[cfg(test)]
#[path = "../../tests/unit/models/verdict_test.rs"]
mod verdict_test;

use crate::utils::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Specifies a reason why a solution is not feasible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    /// Some visited city does not exist.
    UnknownCity,
    /// Some collected item does not exist.
    UnknownItem,
    /// Some item is collected more than once.
    DuplicateItem,
    /// The city of some collected item is not visited.
    UncollectableItem,
    /// Total collected weight is bigger than knapsack capacity.
    CapacityExceeded {
        /// Total collected weight.
        weight: Float,
        /// Knapsack capacity.
        capacity: Float,
    },
    /// Travel takes more time than allowed.
    TimeExceeded {
        /// Total travel time.
        time: Float,
        /// Max allowed time.
        limit: Float,
    },
}

impl Violation {
    /// Returns a short violation tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Violation::UnknownCity => "unknown_city",
            Violation::UnknownItem => "unknown_item",
            Violation::DuplicateItem => "duplicate_item",
            Violation::UncollectableItem => "uncollectable_item",
            Violation::CapacityExceeded { .. } => "capacity_exceeded",
            Violation::TimeExceeded { .. } => "time_exceeded",
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::UnknownCity => write!(f, "[some visited city does not exist]"),
            Violation::UnknownItem => write!(f, "[some collected item does not exist]"),
            Violation::DuplicateItem => write!(f, "[there are repeated items]"),
            Violation::UncollectableItem => write!(f, "[the city of some collected item is not visited]"),
            Violation::CapacityExceeded { .. } => write!(f, "[capacity exceeded]"),
            Violation::TimeExceeded { time, limit } => write!(f, "[time exceeded] {time:.6} {limit:.6}"),
        }
    }
}

/// A score of a feasible solution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Total profit of collected items.
    pub profit: Float,
    /// Total travel time.
    pub time: Float,
    /// Total weight in the knapsack at the destination.
    pub weight: Float,
}

/// A result of solution check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// All found violations, empty for a feasible solution.
    pub violations: Vec<Violation>,
    /// A score, set only for a feasible solution.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<Score>,
}

impl Verdict {
    /// Creates a verdict for a feasible solution.
    pub fn feasible(score: Score) -> Self {
        Self { violations: vec![], score: Some(score) }
    }

    /// Creates a verdict for an infeasible solution.
    pub fn infeasible(violations: Vec<Violation>) -> Self {
        Self { violations, score: None }
    }

    /// Returns true if no constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns tags of violated constraints.
    pub fn tags(&self) -> Vec<&'static str> {
        self.violations.iter().map(|violation| violation.tag()).collect()
    }

    /// Checks whether the verdict contains a violation with given tag.
    pub fn has_violation(&self, tag: &str) -> bool {
        self.violations.iter().any(|violation| violation.tag() == tag)
    }
}
