#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use thop_cli::extensions::generate::{generate_unconstrained_file, get_unconstrained_path};

const INSTANCE_ARG_NAME: &str = "instance";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates an unconstrained variant of the instance: huge capacity and constant speed")
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Sets the benchmark instance file")
                .short('i')
                .long(INSTANCE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the output file, by default the name is derived from the instance")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let instance_path = matches
        .get_one::<String>(INSTANCE_ARG_NAME)
        .map(PathBuf::from)
        .ok_or_else(|| "instance file should be specified".to_string())?;

    let out_path = match matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        Some(path) => PathBuf::from(path),
        None => get_unconstrained_path(&instance_path).map_err(|err| err.to_string())?,
    };

    generate_unconstrained_file(&instance_path, &out_path)
        .map_err(|err| format!("cannot generate unconstrained instance: '{err}'"))
}
