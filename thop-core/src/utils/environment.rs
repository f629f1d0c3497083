use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by checker tools.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences how tools behave.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
    /// Maximum amount of worker threads used by batch operations.
    pub max_threads: usize,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, max_threads: usize) -> Self {
        Self { logger, max_threads: max_threads.max(1) }
    }

    /// Creates an environment which logs nothing.
    pub fn new_silent(max_threads: usize) -> Self {
        Self::new(Arc::new(|_| {}), max_threads)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| eprintln!("{msg}")), get_cpus())
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
