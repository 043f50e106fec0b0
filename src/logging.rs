//! Log subscriber setup
//!
//! Logs go to stderr so that stdout carries only the rendered summary.

use crate::config::{LogFormat, LogLevel};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Returns false if a subscriber was already installed, in which case the
/// existing one stays in place.
pub fn init(level: LogLevel, format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.directive()))
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init(LogLevel::Info, LogFormat::Text);
        assert!(!init(LogLevel::Debug, LogFormat::Json));
    }
}
