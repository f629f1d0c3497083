//! Generates unconstrained instance variants from benchmark instances.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thop_core::format::{create_unconstrained_instance, get_unconstrained_file_name};
use thop_core::utils::{GenericError, GenericResult};

/// Returns a default output path for the unconstrained variant: the same directory with `inf`
/// knapsack size in the file name.
pub fn get_unconstrained_path(instance_path: &Path) -> GenericResult<PathBuf> {
    instance_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(get_unconstrained_file_name)
        .map(|name| instance_path.with_file_name(name))
        .ok_or_else(|| {
            GenericError::from(format!(
                "cannot derive unconstrained instance name from '{}', expecting '<base>_<items>_<type>_<size>_<time>.thop'",
                instance_path.display()
            ))
        })
}

/// Reads the instance file and writes its unconstrained variant to the output file.
pub fn generate_unconstrained_file(instance_path: &Path, out_path: &Path) -> GenericResult<()> {
    let input = File::open(instance_path)
        .map_err(|err| format!("cannot open instance file '{}': '{err}'", instance_path.display()))?;
    let output = File::create(out_path)
        .map_err(|err| format!("cannot create output file '{}': '{err}'", out_path.display()))?;

    create_unconstrained_instance(BufReader::new(input), BufWriter::new(output))
}
