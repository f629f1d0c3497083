//! A command line interface to check *Thief Orienteering Problem* solutions and to run
//! experiments with external solvers.
//!
//! ## Usage
//!
//! - check one or many solutions, instance and solution files are matched by position:
//!
//!     `thop-cli check -i eil51_01_bsc_01_01.thop -s eil51_01_bsc_01_01_01.thop.sol`
//!
//! - generate an unconstrained variant of the benchmark instance:
//!
//!     `thop-cli generate -i eil51_01_bsc_01_01.thop`
//!
//! - run an experiment described by json configuration, listing command lines only:
//!
//!     `thop-cli experiment -c experiment.json --dry-run`
//!
//! For more details, simply run
//!
//!     thop-cli --help

mod commands;

use self::commands::*;

#[path = "."]
mod cli {
    #[cfg(test)]
    #[path = "../tests/unit/main_test.rs"]
    mod main_test;

    use super::*;
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("THOP solution checker")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to check THOP solutions and to run experiments")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(get_check_app())
            .subcommand(get_generate_app())
            .subcommand(get_experiment_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("check", check_matches)) => run_check(check_matches),
            Some(("generate", generate_matches)) => run_generate(generate_matches),
            Some(("experiment", experiment_matches)) => run_experiment(experiment_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
