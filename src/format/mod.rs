//! Output formatters
//!
//! Provides trait-based output formatting for circle summaries.

pub mod json;
pub mod text;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::geometry::Circle;
use crate::stats::CircleSummary;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Get the format name
    fn name(&self) -> &str;

    /// Format the summary
    fn format(&self, summary: &CircleSummary) -> Result<String>;
}

/// Get the formatter for an output format
pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(text::TextFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}

/// Render a summary in the given output format
pub fn render(summary: &CircleSummary, format: OutputFormat) -> Result<String> {
    let formatter = get_formatter(format);
    tracing::debug!("Rendering summary with the {} formatter", formatter.name());
    formatter.format(summary)
}

/// One line per circle: 1-based two-digit index, radius, area, circumference
pub fn format_circle_stats(circles: &[Circle]) -> String {
    circles
        .iter()
        .enumerate()
        .map(|(idx, circle)| {
            format!(
                "{:02}. {}: area={:.2}, circumference={:.2}",
                idx + 1,
                circle,
                circle.area(),
                circle.circumference()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
