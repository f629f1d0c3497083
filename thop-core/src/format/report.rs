#[cfg(test)]
#[path = "../../tests/unit/format/report_test.rs"]
mod report_test;

use crate::models::Verdict;
use std::fmt::Display;

/// Formats a single report line for the checked solution.
///
/// A feasible solution is reported with its profit, an infeasible one with all violations.
pub fn format_report(instance_path: &str, solution_path: &str, verdict: &Verdict) -> String {
    let outcome = match &verdict.score {
        Some(score) if verdict.is_feasible() => format!("{:.3}", score.profit),
        _ => format!(
            "infeasible solution {}",
            verdict.violations.iter().map(|violation| violation.to_string()).collect::<Vec<_>>().join(" ")
        ),
    };

    format!("{instance_path:<30} {solution_path:<30} {outcome}")
}

/// Formats a single report line for the solution which cannot be checked at all.
pub fn format_error_report(instance_path: &str, solution_path: &str, error: &dyn Display) -> String {
    format!("{instance_path:<30} {solution_path:<30} cannot evaluate: {error}")
}
