//! This module provides functionality to check that a given solution is feasible and to score it.
//!
//! The check is performed in the following order:
//! * structural validation: visited cities and collected items exist, items are not repeated and
//!   are located in visited cities. If any of these fails, the solution is not scored at all.
//! * travel simulation along the performed tour: carried weight slows down the thief, so travel time
//!   of each leg depends on items collected before.
//! * capacity and time limits check with a small tolerance.

#[cfg(test)]
#[path = "../../tests/unit/evaluation/evaluator_test.rs"]
mod evaluator_test;

use crate::format::{ParseError, SolutionReader};
use crate::models::{Instance, Score, Solution, Verdict, Violation};
use crate::utils::{Float, exceeds_with_tolerance};

mod speed;
pub use self::speed::SpeedModel;

mod structure;
pub use self::structure::check_structure;

mod travel;
pub use self::travel::*;

/// An absolute tolerance used to compare accumulated weight and time with instance limits.
pub const EPSILON: Float = 1e-3;

/// Parses solution text and evaluates it against the instance.
pub fn evaluate(instance: &Instance, raw_solution: &str) -> Result<Verdict, ParseError> {
    let solution = raw_solution.read_solution()?;

    Ok(evaluate_solution(instance, &solution))
}

/// Evaluates already parsed solution against the instance.
pub fn evaluate_solution(instance: &Instance, solution: &Solution) -> Verdict {
    trace_solution(instance, solution).0
}

/// Evaluates the solution and returns its verdict together with the simulated travel. The travel
/// is `None` when the solution is structurally invalid and cannot be simulated.
pub fn trace_solution(instance: &Instance, solution: &Solution) -> (Verdict, Option<Travel>) {
    let tour = solution.performed_tour(instance);

    let violations = check_structure(instance, &tour, &solution.items);
    if !violations.is_empty() {
        return (Verdict::infeasible(violations), None);
    }

    let travel = simulate_checked(instance, &tour, &solution.items);
    let violations = check_limits(instance, &travel);

    let verdict = if violations.is_empty() {
        Verdict::feasible(Score { profit: travel.profit, time: travel.time, weight: travel.weight })
    } else {
        Verdict::infeasible(violations)
    };

    (verdict, Some(travel))
}

/// Runs travel simulation for a tour and items which passed structural validation.
fn simulate_checked(instance: &Instance, tour: &[i64], items: &[i64]) -> Travel {
    // NOTE indices are validated, so they are positive here
    let tour = tour.iter().map(|&city| city as usize).collect::<Vec<_>>();
    let items = items.iter().map(|&item| item as usize).collect::<Vec<_>>();

    simulate_travel(instance, &tour, &items)
}

fn check_limits(instance: &Instance, travel: &Travel) -> Vec<Violation> {
    let meta = &instance.meta;
    let mut violations = vec![];

    if exceeds_with_tolerance(travel.weight, meta.capacity, EPSILON) {
        violations.push(Violation::CapacityExceeded { weight: travel.weight, capacity: meta.capacity });
    }

    if exceeds_with_tolerance(travel.time, meta.max_time, EPSILON) {
        violations.push(Violation::TimeExceeded { time: travel.time, limit: meta.max_time });
    }

    violations
}
