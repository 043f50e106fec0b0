//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::stats::CircleSummary;

/// JSON formatter - outputs the summary record as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn format(&self, summary: &CircleSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(&summary.as_record())?)
    }
}
