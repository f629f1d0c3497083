#[cfg(test)]
#[path = "../../tests/unit/format/instance_rewriter_test.rs"]
mod instance_rewriter_test;

use crate::utils::GenericResult;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// A capacity which is big enough to never constrain any benchmark instance.
pub const UNCONSTRAINED_CAPACITY: &str = "987654321";

/// A speed used by unconstrained instances, the same for empty and full knapsack.
pub const UNCONSTRAINED_SPEED: &str = "1.00";

/// Rewrites instance text replacing capacity and speed bounds with unconstrained values.
/// The rest of the lines are copied as they are, without leading and trailing whitespaces.
pub fn create_unconstrained_instance<R: Read, W: Write>(
    reader: BufReader<R>,
    mut writer: BufWriter<W>,
) -> GenericResult<()> {
    reader.lines().try_for_each(|line| {
        let line = line?;
        let line = if line.contains("CAPACITY OF KNAPSACK") {
            format!("CAPACITY OF KNAPSACK: {UNCONSTRAINED_CAPACITY}")
        } else if line.contains("MIN SPEED") {
            format!("MIN SPEED: {UNCONSTRAINED_SPEED}")
        } else if line.contains("MAX SPEED") {
            format!("MAX SPEED: {UNCONSTRAINED_SPEED}")
        } else {
            line.trim().to_string()
        };

        writeln!(writer, "{line}")
    })?;

    writer.flush()?;

    Ok(())
}

/// Returns a file name of unconstrained variant for the benchmark instance file name
/// `<base>_<items>_<type>_<size>_<time>.thop`, e.g. `eil51_01_bsc_01_02.thop` becomes
/// `eil51_01_bsc_inf_02.thop`.
pub fn get_unconstrained_file_name(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(".thop")?;
    let parts = stem.split('_').collect::<Vec<_>>();

    match parts.as_slice() {
        [base, items, knapsack_type, _, time] => Some(format!("{base}_{items}_{knapsack_type}_inf_{time}.thop")),
        _ => None,
    }
}
