#[cfg(test)]
#[path = "../../tests/unit/commands/experiment_test.rs"]
mod experiment_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::BufReader;
use thop_cli::extensions::experiment::{read_config, run_experiment as run_experiment_jobs};

const CONFIG_ARG_NAME: &str = "config";
const DRY_RUN_ARG_NAME: &str = "dry-run";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_experiment_app() -> Command {
    Command::new("experiment")
        .about("Runs external solver over instances, parameter configurations and seeds from json configuration")
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Sets the experiment configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(DRY_RUN_ARG_NAME)
                .help("Only writes command lines of planned solver runs")
                .long(DRY_RUN_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for dry run output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_experiment(matches: &ArgMatches) -> Result<(), String> {
    let config_path =
        matches.get_one::<String>(CONFIG_ARG_NAME).ok_or_else(|| "config file should be specified".to_string())?;
    let config = read_config(BufReader::new(open_file(config_path, "config")?)).map_err(|err| err.to_string())?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let environment = create_environment(false);

    run_experiment_jobs(&config, matches.get_flag(DRY_RUN_ARG_NAME), &environment, create_write_buffer(out_result))
        .map_err(|err| format!("experiment failed: {err}"))
}
