//! circle-stats: Random Circle Statistics
//!
//! A library and CLI tool that generates random circles within a radius
//! range, summarizes them, and reports the summary as text or JSON.
//!
//! ## Features
//!
//! - Layered configuration: TOML file < `CURSOR_PYTHON_*` environment < flags
//! - Reproducible generation from a seed
//! - Summary statistics with explicit absence for empty runs
//! - Text and JSON output, text and JSON logs
//!
//! ## Quick Start
//!
//! ```rust
//! use circle_stats::geometry::generate::generate;
//! use circle_stats::stats::summarize;
//!
//! let circles = generate(10, 1.0, 5.0, Some(42)).unwrap();
//! let summary = summarize(circles);
//! println!("Total area: {:.2}", summary.total_area);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geometry;
pub mod logging;
pub mod rng;
pub mod stats;
pub mod timing;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{resolve, LogFormat, LogLevel, OutputFormat, Settings};
pub use error::{Error, Result};
pub use geometry::Circle;
pub use stats::{summarize, CircleSummary, SummaryRecord};
