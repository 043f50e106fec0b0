//! Configuration management
//!
//! Resolves `Settings` from three sources with precedence
//! file < environment < command line. Config location: `cursor-python.toml`
//! or `cursor_python.toml` in the working directory, or an explicit path.

pub mod defaults;
pub mod source;

use crate::error::{Error, Result};
use defaults::*;
use serde::Serialize;
use source::{
    coerce_float, coerce_int, coerce_string, find_default_config, load_from_env, load_from_file,
    merge_sources, RawSource,
};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Filter directive understood by tracing-subscriber
    ///
    /// tracing has no level above ERROR, so CRITICAL shares it.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!("Unsupported log level '{}'", s)),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unsupported log format '{}'", s)),
        }
    }
}

/// Summary output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unsupported output format '{}'", s)),
        }
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Number of circles to generate
    pub count: i64,

    /// Lower radius bound
    pub min_radius: f64,

    /// Upper radius bound
    pub max_radius: f64,

    /// Seed for reproducible runs
    pub seed: Option<i64>,

    pub log_level: LogLevel,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            seed: None,
            log_level: LogLevel::default(),
            log_format: LogFormat::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Coerce a merged raw source onto a base
    ///
    /// Keys missing from `raw` keep the base value. Unknown keys are ignored.
    pub fn coerce(raw: &RawSource, base: &Settings) -> Result<Self> {
        let mut settings = base.clone();

        for (key, value) in raw {
            match key.as_str() {
                "count" => settings.count = coerce_int(key, value)?,
                "min_radius" => settings.min_radius = coerce_float(key, value)?,
                "max_radius" => settings.max_radius = coerce_float(key, value)?,
                "seed" => settings.seed = Some(coerce_int(key, value)?),
                "log_level" => settings.log_level = parse_choice(key, value)?,
                "log_format" => settings.log_format = parse_choice(key, value)?,
                "output_format" => settings.output_format = parse_choice(key, value)?,
                _ => tracing::debug!("Ignoring unknown config key '{}'", key),
            }
        }

        Ok(settings)
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> Result<()> {
        if self.count < 0 {
            return Err(Error::Config("count must be non-negative".to_string()));
        }
        if self.min_radius < 0.0 {
            return Err(Error::Config(
                "min_radius must be non-negative".to_string(),
            ));
        }
        if self.max_radius <= 0.0 {
            return Err(Error::Config(
                "max_radius must be greater than zero".to_string(),
            ));
        }
        if self.min_radius > self.max_radius {
            return Err(Error::Config(format!(
                "min_radius ({}) cannot be greater than max_radius ({})",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}

/// Parse a restricted string choice, reporting the key on failure
fn parse_choice<T>(key: &str, value: &toml::Value) -> Result<T>
where
    T: FromStr<Err = String>,
{
    coerce_string(key, value)?.parse().map_err(Error::Config)
}

/// Merge sources in precedence order onto a base, then validate
pub fn merge_settings<'a, I>(sources: I, base: &Settings) -> Result<Settings>
where
    I: IntoIterator<Item = &'a RawSource>,
{
    let merged = merge_sources(sources);
    let settings = Settings::coerce(&merged, base)?;
    settings.validate()?;
    Ok(settings)
}

/// Pick the config file: the explicit path, else the first default in `search_dir`
pub fn locate_config(explicit: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config(search_dir),
    }
}

/// Resolve settings from a config file, the environment and CLI overrides
///
/// # Arguments
/// * `config_path` - Explicit config file; must exist when given
/// * `env` - Environment snapshot (only `CURSOR_PYTHON_*` keys are read)
/// * `cli_overrides` - Flags given on the command line
pub fn resolve<I>(config_path: Option<&Path>, env: I, cli_overrides: &RawSource) -> Result<Settings>
where
    I: IntoIterator<Item = (String, String)>,
{
    let search_dir = std::env::current_dir().map_err(working_dir_error)?;
    resolve_in(&search_dir, config_path, env, cli_overrides)
}

/// The default lookup needs the working directory, so failing to read it is
/// a configuration error
fn working_dir_error(e: std::io::Error) -> Error {
    Error::Config(format!("Failed to determine working directory: {}", e))
}

/// Like `resolve`, searching `search_dir` for a default config file
pub fn resolve_in<I>(
    search_dir: &Path,
    config_path: Option<&Path>,
    env: I,
    cli_overrides: &RawSource,
) -> Result<Settings>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut sources = Vec::with_capacity(3);

    if let Some(path) = locate_config(config_path, search_dir) {
        tracing::debug!("Loading config file {}", path.display());
        sources.push(load_from_file(&path)?);
    }
    sources.push(load_from_env(env));
    sources.push(cli_overrides.clone());

    merge_settings(&sources, &Settings::default())
}
