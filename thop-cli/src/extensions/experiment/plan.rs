#[cfg(test)]
#[path = "../../../tests/unit/extensions/experiment/plan_test.rs"]
mod plan_test;

use super::{ExperimentConfig, GridConfig, KnapsackSize};
use std::path::PathBuf;
use thop_core::utils::{GenericError, GenericResult};

/// Identifies a benchmark instance inside of instance grid.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceKey {
    /// A base tsp instance name.
    pub tsp_base: String,
    /// Amount of items per city.
    pub items_per_city: usize,
    /// A knapsack type.
    pub knapsack_type: String,
    /// A knapsack size category.
    pub knapsack_size: KnapsackSize,
    /// A max travel time category.
    pub max_travel_time: usize,
}

impl InstanceKey {
    /// Returns instance family name which is used to look up solver parameters.
    pub fn family(&self) -> String {
        format!("{}_{:02}_{}", self.tsp_base, self.items_per_city, self.knapsack_type)
    }

    /// Returns instance name without extension.
    pub fn name(&self) -> String {
        format!("{}_{}_{:02}", self.family(), self.knapsack_size, self.max_travel_time)
    }
}

/// A single solver run.
#[derive(Clone, Debug)]
pub struct Job {
    /// An instance to solve.
    pub key: InstanceKey,
    /// A zero-based run index.
    pub run: usize,
    /// A random seed of the run.
    pub seed: u64,
    /// A time budget in seconds.
    pub time_budget: f64,
    /// A path to the instance file.
    pub instance_path: PathBuf,
    /// A path to the solution file.
    pub solution_path: PathBuf,
    /// Solver arguments.
    pub args: Vec<String>,
}

/// Returns a time budget of the solver run: it grows with the size of the base tsp instance
/// (encoded by digits of its name) and amount of items per city.
pub fn get_time_budget(tsp_base: &str, items_per_city: usize, runtime_factor: f64) -> GenericResult<f64> {
    let cities = tsp_base
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect::<String>()
        .parse::<usize>()
        .map_err(|err| format!("cannot get amount of cities from tsp base '{tsp_base}': '{err}'"))?;

    let budget = runtime_factor * ((cities as f64 - 2.) * items_per_city as f64 / 10.).ceil();

    if budget > 0. {
        Ok(budget)
    } else {
        Err(format!("time budget for '{tsp_base}' with {items_per_city} item(s) per city should be positive").into())
    }
}

/// Creates all solver runs defined by the configuration: each grid combination is run the
/// configured amount of times.
pub fn plan_jobs(config: &ExperimentConfig) -> GenericResult<Vec<Job>> {
    config
        .grids
        .iter()
        .flat_map(get_instance_keys)
        .flat_map(|key| (0..config.runs).map(move |run| (key.clone(), run)))
        .map(|(key, run)| create_job(config, key, run))
        .collect()
}

/// Returns the solver command line of the job.
pub fn get_command_line(executable: &str, job: &Job) -> String {
    std::iter::once(executable).chain(job.args.iter().map(|arg| arg.as_str())).collect::<Vec<_>>().join(" ")
}

fn get_instance_keys(grid: &GridConfig) -> Vec<InstanceKey> {
    let mut keys = vec![];

    for tsp_base in grid.tsp_bases.iter() {
        for &items_per_city in grid.items_per_city.iter() {
            for knapsack_type in grid.knapsack_types.iter() {
                for &knapsack_size in grid.knapsack_sizes.iter() {
                    for &max_travel_time in grid.max_travel_times.iter() {
                        keys.push(InstanceKey {
                            tsp_base: tsp_base.clone(),
                            items_per_city,
                            knapsack_type: knapsack_type.clone(),
                            knapsack_size,
                            max_travel_time,
                        });
                    }
                }
            }
        }
    }

    keys
}

fn create_job(config: &ExperimentConfig, key: InstanceKey, run: usize) -> GenericResult<Job> {
    let seed = *config.seeds.get(run).ok_or_else(|| GenericError::from(format!("no seed for run {}", run + 1)))?;
    let time_budget = get_time_budget(&key.tsp_base, key.items_per_city, config.get_runtime_factor())?;

    let family_dir = format!("{}-thop", key.tsp_base);
    let instance_path = PathBuf::from(&config.instances_dir).join(&family_dir).join(format!("{}.thop", key.name()));
    let solution_path =
        PathBuf::from(&config.solutions_dir).join(&family_dir).join(format!("{}_{:02}.thop.sol", key.name(), run + 1));

    let mut args = vec![
        "--inputfile".to_string(),
        instance_path.display().to_string(),
        "--seed".to_string(),
        seed.to_string(),
        "--time".to_string(),
        format!("{time_budget:.1}"),
        "--outputfile".to_string(),
        solution_path.display().to_string(),
    ];

    args.extend(config.fixed_args.iter().cloned());

    if !config.parameters.is_empty() {
        let family = key.family();
        let parameters = config
            .parameters
            .get(&family)
            .ok_or_else(|| GenericError::from(format!("cannot find parameters for '{family}'")))?;

        parameters.iter().for_each(|(flag, value)| {
            args.push(flag.clone());
            args.push(match value {
                serde_json::Value::String(value) => value.clone(),
                value => value.to_string(),
            });
        });
    }

    Ok(Job { key, run, seed, time_budget, instance_path, solution_path, args })
}
