//! A helper module which contains functionality to run feasibility checks on solution files.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use crate::extensions::draw::write_svg;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use thop_core::evaluation::evaluate;
use thop_core::format::{SolutionReader, ThopProblem, format_error_report, format_report};
use thop_core::models::{Instance, Verdict};
use thop_core::utils::{Environment, GenericError, GenericResult, ThreadPool, Timer, parallel_collect};

/// Specifies a pair of instance and solution files to be checked together.
#[derive(Clone, Debug)]
pub struct CheckPair {
    /// A path to the instance file.
    pub instance_path: String,
    /// A path to the solution file.
    pub solution_path: String,
}

/// Keeps result of checking a single pair.
#[derive(Clone, Debug)]
pub struct CheckOutcome {
    /// A path to the instance file.
    pub instance_path: String,
    /// A path to the solution file.
    pub solution_path: String,
    /// A verdict or an error which prevented the evaluation.
    pub result: Result<Verdict, GenericError>,
}

impl CheckOutcome {
    /// Returns true if the pair was evaluated, regardless of the solution feasibility.
    pub fn is_evaluated(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Serialize)]
struct CheckRecord<'a> {
    instance: &'a str,
    solution: &'a str,
    feasible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<&'a Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Checks all pairs in parallel using at most `max_threads` of the environment, an error in one
/// pair does not affect the others. When `draw` is set, feasible solutions are rendered next to
/// their solution files.
pub fn check_solutions(
    pairs: &[CheckPair],
    draw: bool,
    environment: &Environment,
) -> GenericResult<Vec<CheckOutcome>> {
    let timer = Timer::start();
    let pool = ThreadPool::new(environment.max_threads)?;

    let outcomes = pool.execute(|| {
        parallel_collect(pairs, |pair| CheckOutcome {
            instance_path: pair.instance_path.clone(),
            solution_path: pair.solution_path.clone(),
            result: check_pair(pair, draw, environment),
        })
    });

    (environment.logger)(&format!(
        "checked {} solution(s) in {}ms, {} could not be evaluated",
        outcomes.len(),
        timer.elapsed_millis(),
        outcomes.iter().filter(|outcome| !outcome.is_evaluated()).count()
    ));

    Ok(outcomes)
}

/// Writes one report line per checked pair.
pub fn write_report<W: Write>(outcomes: &[CheckOutcome], mut writer: BufWriter<W>) -> GenericResult<()> {
    outcomes.iter().try_for_each(|outcome| {
        let line = match &outcome.result {
            Ok(verdict) => format_report(&outcome.instance_path, &outcome.solution_path, verdict),
            Err(err) => format_error_report(&outcome.instance_path, &outcome.solution_path, err),
        };

        writeln!(writer, "{line}")
    })?;

    writer.flush().map_err(GenericError::from)
}

/// Writes checked pairs as a json array.
pub fn write_json<W: Write>(outcomes: &[CheckOutcome], mut writer: BufWriter<W>) -> GenericResult<()> {
    let records = outcomes
        .iter()
        .map(|outcome| CheckRecord {
            instance: outcome.instance_path.as_str(),
            solution: outcome.solution_path.as_str(),
            feasible: outcome.result.as_ref().is_ok_and(|verdict| verdict.is_feasible()),
            verdict: outcome.result.as_ref().ok(),
            error: outcome.result.as_ref().err().map(|err| err.to_string()),
        })
        .collect::<Vec<_>>();

    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;

    writer.flush().map_err(GenericError::from)
}

/// Returns a path of the rendered solution.
pub fn get_drawing_path(solution_path: &str) -> String {
    format!("{solution_path}.svg")
}

fn check_pair(pair: &CheckPair, draw: bool, environment: &Environment) -> GenericResult<Verdict> {
    let instance = read_instance(&pair.instance_path)?;
    let raw_solution = read_text(&pair.solution_path, "solution")?;

    let verdict = evaluate(&instance, &raw_solution)
        .map_err(|err| GenericError::from(format!("cannot read solution '{}': {err}", pair.solution_path)))?;

    if draw && verdict.is_feasible() {
        if let Err(err) = draw_solution(&instance, &raw_solution, &pair.solution_path) {
            (environment.logger)(&format!("cannot draw solution '{}': {err}", pair.solution_path));
        }
    }

    Ok(verdict)
}

fn draw_solution(instance: &Instance, raw_solution: &str, solution_path: &str) -> GenericResult<()> {
    let solution = raw_solution.read_solution().map_err(GenericError::from)?;
    let file = File::create(get_drawing_path(solution_path))?;

    write_svg(instance, &solution, BufWriter::new(file))
}

fn read_instance(path: &str) -> GenericResult<Instance> {
    let file = File::open(path).map_err(|err| format!("cannot open instance file '{path}': '{err}'"))?;

    BufReader::new(file).read_thop().map_err(|err| format!("cannot read instance '{path}': {err}").into())
}

fn read_text(path: &str, description: &str) -> GenericResult<String> {
    let mut buffer = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut buffer))
        .map_err(|err| format!("cannot read {description} file '{path}': '{err}'"))?;

    Ok(buffer)
}
