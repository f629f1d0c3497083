//! Experiment configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/experiment/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::io::{BufReader, Read};
use thop_core::utils::{GenericResult, get_cpus};

/// An experiment configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentConfig {
    /// A path to the solver executable.
    pub executable: String,
    /// A root directory of benchmark instances.
    pub instances_dir: String,
    /// A root directory where solutions are written.
    pub solutions_dir: String,
    /// Arguments passed to every solver run as they are.
    #[serde(default)]
    pub fixed_args: Vec<String>,
    /// Amount of independent runs per instance.
    pub runs: usize,
    /// Random seeds, one per run.
    pub seeds: Vec<u64>,
    /// A multiplier of the time budget. Default is 1.
    pub runtime_factor: Option<f64>,
    /// Amount of solver runs executed simultaneously. Default is number of cpus minus two.
    pub workers: Option<usize>,
    /// Instance grids.
    pub grids: Vec<GridConfig>,
    /// Solver parameters per instance family, the key has `<base>_<items>_<type>` form.
    #[serde(default)]
    pub parameters: HashMap<String, BTreeMap<String, serde_json::Value>>,
}

/// A grid of instances: each combination of properties defines one instance.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Base tsp instance names, e.g. `eil51`.
    pub tsp_bases: Vec<String>,
    /// Amount of items per city.
    pub items_per_city: Vec<usize>,
    /// Knapsack types, e.g. `bsc`, `unc`, `usw`.
    pub knapsack_types: Vec<String>,
    /// Knapsack sizes.
    pub knapsack_sizes: Vec<KnapsackSize>,
    /// Max travel time categories.
    pub max_travel_times: Vec<usize>,
}

/// A knapsack size category of the instance.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum KnapsackSize {
    /// A bounded knapsack size category.
    Bounded(usize),
    /// An unconstrained knapsack.
    Unconstrained(Unconstrained),
}

/// A marker of unconstrained knapsack which is written as `inf`.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
pub enum Unconstrained {
    /// An unconstrained size.
    #[serde(rename = "inf")]
    Inf,
}

impl Display for KnapsackSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KnapsackSize::Bounded(size) => write!(f, "{size:02}"),
            KnapsackSize::Unconstrained(_) => write!(f, "inf"),
        }
    }
}

impl ExperimentConfig {
    /// Returns amount of workers to use.
    pub fn get_workers(&self) -> usize {
        self.workers.unwrap_or_else(|| get_cpus().saturating_sub(2)).max(1)
    }

    /// Returns the time budget multiplier.
    pub fn get_runtime_factor(&self) -> f64 {
        self.runtime_factor.unwrap_or(1.)
    }

    /// Checks that configuration is consistent.
    pub fn validate(&self) -> GenericResult<()> {
        if self.executable.trim().is_empty() {
            return Err("executable should be specified".into());
        }

        if self.runs == 0 {
            return Err("amount of runs should be positive".into());
        }

        if self.seeds.len() < self.runs {
            return Err(format!("expecting at least {} seeds, got: {}", self.runs, self.seeds.len()).into());
        }

        if self.get_runtime_factor() <= 0. {
            return Err(format!("runtime factor should be positive, got: '{}'", self.get_runtime_factor()).into());
        }

        if self.workers == Some(0) {
            return Err("amount of workers should be positive".into());
        }

        if self.grids.is_empty() {
            return Err("at least one grid should be specified".into());
        }

        Ok(())
    }
}

/// Reads experiment configuration from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<ExperimentConfig> {
    let config: ExperimentConfig =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))?;

    config.validate()?;

    Ok(config)
}
