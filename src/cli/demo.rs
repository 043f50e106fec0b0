//! Generate-and-summarize run

use crate::config::Settings;
use crate::error::Result;
use crate::geometry::generate::generate;
use crate::stats::{summarize, CircleSummary};
use crate::timing::timed;
use tracing::{debug, info, warn};

/// Generate circles for the settings and summarize them
///
/// The generation and aggregation step is timed and logged.
pub fn run_demo(settings: &Settings) -> Result<CircleSummary> {
    let summary = timed("generate_and_summarize", || {
        generate(
            settings.count,
            settings.min_radius,
            settings.max_radius,
            settings.seed,
        )
        .map(summarize)
    })?;

    if summary.is_empty() {
        warn!("No circles generated.");
        return Ok(summary);
    }

    info!(
        "Generated {} circles within radius range {:.2}..{:.2}",
        summary.count(),
        settings.min_radius,
        settings.max_radius
    );
    debug!("Runtime options: {}", serde_json::to_string(settings)?);

    Ok(summary)
}
