//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of circles
pub const DEFAULT_COUNT: i64 = 5;

/// Default lower radius bound
pub const DEFAULT_MIN_RADIUS: f64 = 1.0;

/// Default upper radius bound
pub const DEFAULT_MAX_RADIUS: f64 = 10.0;

/// Prefix marking environment variables as configuration
pub const ENV_PREFIX: &str = "CURSOR_PYTHON_";

/// Config file names searched in the working directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["cursor-python.toml", "cursor_python.toml"];

/// Table in the config file holding the settings (top level is used if absent)
pub const CONFIG_SECTION: &str = "cursor_python";

