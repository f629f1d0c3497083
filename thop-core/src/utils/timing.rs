use crate::utils::Float;
use std::time::{Duration, Instant};

/// Implements simple performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in seconds.
    pub fn elapsed_secs_as_float(&self) -> Float {
        (Instant::now() - self.start).as_secs_f64() as Float
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }

    /// Runs the action and passes its duration to the callback.
    pub fn measure_duration_with_callback<R, FA, FC>(action: FA, callback: FC) -> R
    where
        FA: FnOnce() -> R,
        FC: FnOnce(Duration),
    {
        let start = Instant::now();
        let result = action();
        callback(Instant::now() - start);

        result
    }
}
