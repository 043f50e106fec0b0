//! CLI entry point
//!
//! Parses flags, resolves settings, runs the generation and writes the
//! rendered summary. Every failure is mapped to a process exit code.

pub mod demo;

use crate::config::source::RawSource;
use crate::config::{resolve, LogFormat, LogLevel, Settings};
use crate::constants::exit;
use crate::error::Result;
use crate::format::render;
use crate::logging;
use crate::stats::CircleSummary;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use toml::Value;
use tracing::error;

/// Generate random circles and inspect their statistics
#[derive(Parser, Debug, Default)]
#[command(name = "circle-stats")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Number of random circles to generate
    #[arg(short = 'n', long)]
    pub count: Option<i64>,

    /// Minimum radius for generated circles
    #[arg(long)]
    pub min_radius: Option<f64>,

    /// Maximum radius for generated circles
    #[arg(long)]
    pub max_radius: Option<f64>,

    /// Seed for the random number generator (enables reproducible runs)
    #[arg(long)]
    pub seed: Option<i64>,

    /// Logging verbosity: DEBUG, INFO, WARNING, ERROR or CRITICAL
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output: text or json
    #[arg(long)]
    pub log_format: Option<String>,

    /// Summary output: text or json
    #[arg(long)]
    pub output_format: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line, as a raw config source
    ///
    /// Flags that were not given contribute nothing.
    pub fn overrides(&self) -> RawSource {
        let mut raw = RawSource::new();

        if let Some(count) = self.count {
            raw.insert("count".to_string(), Value::Integer(count));
        }
        if let Some(min_radius) = self.min_radius {
            raw.insert("min_radius".to_string(), Value::Float(min_radius));
        }
        if let Some(max_radius) = self.max_radius {
            raw.insert("max_radius".to_string(), Value::Float(max_radius));
        }
        if let Some(seed) = self.seed {
            raw.insert("seed".to_string(), Value::Integer(seed));
        }

        let choices = [
            ("log_level", &self.log_level),
            ("log_format", &self.log_format),
            ("output_format", &self.output_format),
        ];
        for (key, value) in choices {
            if let Some(value) = value {
                raw.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        raw
    }
}

/// Run the CLI against the process arguments, environment and stdout
pub fn run() -> i32 {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(cli, utf8_vars(std::env::vars_os()), &mut out)
}

/// Keep the environment pairs whose key and value are both valid Unicode
///
/// Unrelated variables may hold arbitrary bytes; they cannot carry settings.
pub fn utf8_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Run the CLI with an explicit environment and output sink
///
/// Returns the process exit code.
pub fn run_with<I, W>(cli: Cli, env: I, out: &mut W) -> i32
where
    I: IntoIterator<Item = (String, String)>,
    W: Write,
{
    let settings = match resolve(cli.config.as_deref(), env, &cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init(LogLevel::default(), LogFormat::default());
            error!("{}", e);
            return e.exit_code();
        }
    };

    logging::init(settings.log_level, settings.log_format);

    let summary = match demo::run_demo(&settings) {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            return e.exit_code();
        }
    };

    match emit_summary(&summary, &settings, out) {
        Ok(()) => exit::SUCCESS,
        Err(e) => {
            error!("Failed to write summary: {}", e);
            e.exit_code()
        }
    }
}

/// Write the rendered summary followed by a newline
fn emit_summary<W: Write>(summary: &CircleSummary, settings: &Settings, out: &mut W) -> Result<()> {
    let rendered = render(summary, settings.output_format)?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;
    Ok(())
}
