//! circle-stats CLI entry point
//!
//! Random circle generator with summary statistics

use circle_stats::cli;

fn main() {
    std::process::exit(cli::run());
}
