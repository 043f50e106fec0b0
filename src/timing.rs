//! Execution timing

use std::time::{Duration, Instant};
use tracing::info;

/// Logs the time between creation and drop at INFO
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    /// Start timing a labelled scope
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Time elapsed since the timer started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        info!(
            "'{}' executed in {:.4}s",
            self.label,
            self.elapsed().as_secs_f64()
        );
    }
}

/// Run `f`, logging how long it took
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let _timer = ScopedTimer::start(label);
    f()
}
