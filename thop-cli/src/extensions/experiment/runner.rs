#[cfg(test)]
#[path = "../../../tests/unit/extensions/experiment/runner_test.rs"]
mod runner_test;

use super::{ExperimentConfig, Job, get_command_line, plan_jobs};
use std::fs;
use std::io::{BufWriter, Write};
use std::process::Command;
use thop_core::utils::{Environment, GenericError, GenericResult, ThreadPool, Timer, parallel_collect};

/// Runs all planned jobs of the experiment. In dry run mode, only writes command lines.
///
/// A failed run does not stop the others, all failures are reported together at the end.
pub fn run_experiment<W: Write>(
    config: &ExperimentConfig,
    dry_run: bool,
    environment: &Environment,
    mut writer: BufWriter<W>,
) -> GenericResult<()> {
    let jobs = plan_jobs(config)?;

    if dry_run {
        jobs.iter().try_for_each(|job| writeln!(writer, "{}", get_command_line(&config.executable, job)))?;
        return writer.flush().map_err(GenericError::from);
    }

    jobs.iter().filter_map(|job| job.solution_path.parent()).try_for_each(|dir| {
        fs::create_dir_all(dir).map_err(|err| format!("cannot create directory '{}': '{err}'", dir.display()))
    })?;

    let workers = config.get_workers();
    (environment.logger)(&format!("running {} job(s) using {workers} worker(s)", jobs.len()));

    let timer = Timer::start();
    let pool = ThreadPool::new(workers)?;
    let results = pool.execute(|| parallel_collect(&jobs, |job| run_job(config, job, environment)));

    let errors = results.into_iter().filter_map(|result| result.err()).collect::<Vec<_>>();
    (environment.logger)(&format!(
        "experiment finished in {:.1}s: {} succeeded, {} failed",
        timer.elapsed_secs_as_float(),
        jobs.len() - errors.len(),
        errors.len()
    ));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of {} job(s) failed:\n{}", errors.len(), jobs.len(), GenericError::join_many(&errors, "\n"))
            .into())
    }
}

fn run_job(config: &ExperimentConfig, job: &Job, environment: &Environment) -> GenericResult<()> {
    let name = format!("{} run {:02}", job.key.name(), job.run + 1);

    let status = Timer::measure_duration_with_callback(
        || Command::new(&config.executable).args(&job.args).status(),
        |duration| (environment.logger)(&format!("{name} finished in {}ms", duration.as_millis())),
    )
    .map_err(|err| format!("{name}: cannot start '{}': '{err}'", config.executable))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("{name}: solver exited with {status}").into())
    }
}
