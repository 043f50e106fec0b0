//! Human-readable text output formatter

use crate::error::Result;
use crate::format::{format_circle_stats, OutputFormatter};
use crate::stats::CircleSummary;

/// Text formatter - outputs a per-circle table and the largest circle
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn format(&self, summary: &CircleSummary) -> Result<String> {
        if summary.is_empty() {
            return Ok("Nothing to report.".to_string());
        }

        let mut output = String::from("Circle statistics:\n");
        output.push_str(&format_circle_stats(&summary.circles));

        if let Some(largest) = &summary.largest {
            output.push_str(&format!(
                "\nLargest circle: {} (area={:.2}, circumference={:.2})",
                largest,
                largest.area(),
                largest.circumference()
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Circle;
    use crate::stats::summarize;

    #[test]
    fn test_text_format() {
        let summary = summarize(vec![Circle::new(1.0), Circle::new(3.0), Circle::new(2.0)]);
        let output = TextFormatter.format(&summary).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Circle statistics:");
        assert!(lines[1].starts_with("01. Circle(radius=1.00)"));
        assert!(lines[3].starts_with("03. Circle(radius=2.00)"));
        assert_eq!(
            lines[4],
            "Largest circle: Circle(radius=3.00) (area=28.27, circumference=18.85)"
        );
    }

    #[test]
    fn test_text_format_empty() {
        let output = TextFormatter.format(&summarize(Vec::new())).unwrap();
        assert_eq!(output, "Nothing to report.");
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
    }
}
