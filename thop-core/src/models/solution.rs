#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::Instance;
use std::iter::once;

/// A solution as it was produced by a solver. Values are kept as written, so they are not
/// guaranteed to reference existing cities or items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Intermediate visited cities in order, without the fixed origin and destination.
    pub cities: Vec<i64>,
    /// Collected items.
    pub items: Vec<i64>,
}

impl Solution {
    /// Creates a new instance of `Solution`.
    pub fn new(cities: Vec<i64>, items: Vec<i64>) -> Self {
        Self { cities, items }
    }

    /// Returns the performed tour: intermediate cities surrounded by the origin and the destination.
    pub fn performed_tour(&self, instance: &Instance) -> Vec<i64> {
        once(instance.origin() as i64)
            .chain(self.cities.iter().copied())
            .chain(once(instance.destination() as i64))
            .collect()
    }
}
