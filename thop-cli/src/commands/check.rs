#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use thop_cli::extensions::check::*;

const INSTANCE_ARG_NAME: &str = "instance";
const SOLUTION_ARG_NAME: &str = "solution";
const JSON_ARG_NAME: &str = "json";
const DRAW_ARG_NAME: &str = "draw";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const QUIET_ARG_NAME: &str = "quiet";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Checks feasibility of solutions and reports their profit")
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Sets instance files, each one is matched with the solution file at the same position")
                .short('i')
                .long(INSTANCE_ARG_NAME)
                .required(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution files")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(JSON_ARG_NAME)
                .help("Writes results as json instead of report lines")
                .long(JSON_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(DRAW_ARG_NAME)
                .help("Writes an svg image next to each feasible solution file")
                .short('d')
                .long(DRAW_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(QUIET_ARG_NAME)
                .help("Disables logging to stderr")
                .short('q')
                .long(QUIET_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let pairs = get_check_pairs(matches)?;
    let environment = create_environment(matches.get_flag(QUIET_ARG_NAME));

    let outcomes = check_solutions(&pairs, matches.get_flag(DRAW_ARG_NAME), &environment)
        .map_err(|err| format!("cannot check solutions: '{err}'"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let out_buffer = create_write_buffer(out_result);

    let written =
        if matches.get_flag(JSON_ARG_NAME) { write_json(&outcomes, out_buffer) } else { write_report(&outcomes, out_buffer) };
    written.map_err(|err| format!("cannot write results: '{err}'"))?;

    match outcomes.iter().filter(|outcome| !outcome.is_evaluated()).count() {
        0 => Ok(()),
        failed => Err(format!("{failed} of {} solution(s) could not be evaluated", outcomes.len())),
    }
}

fn get_check_pairs(matches: &ArgMatches) -> Result<Vec<CheckPair>, String> {
    let get_paths = |arg_name: &str| {
        matches.get_many::<String>(arg_name).map(|paths| paths.cloned().collect::<Vec<_>>()).unwrap_or_default()
    };

    let instances = get_paths(INSTANCE_ARG_NAME);
    let solutions = get_paths(SOLUTION_ARG_NAME);

    if instances.len() != solutions.len() {
        return Err(format!(
            "amount of instance and solution files should match, got {} instance(s) and {} solution(s)",
            instances.len(),
            solutions.len()
        ));
    }

    Ok(instances
        .into_iter()
        .zip(solutions)
        .map(|(instance_path, solution_path)| CheckPair { instance_path, solution_path })
        .collect())
}
