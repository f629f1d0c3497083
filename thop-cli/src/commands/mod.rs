mod check;
pub use self::check::*;

mod experiment;
pub use self::experiment::*;

mod generate;
pub use self::generate::*;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::sync::Arc;
use thop_core::utils::{Environment, get_cpus};

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn create_environment(is_quiet: bool) -> Environment {
    if is_quiet {
        Environment::new_silent(get_cpus())
    } else {
        Environment::new(Arc::new(|msg: &str| eprintln!("{msg}")), get_cpus())
    }
}
