//! Terminal output for experiment reports.
//!
//! Layout lives in `factorial_core::formatting`; colors come from the
//! `ansi` feature on `factorial-core`, which this crate enables.

use colored::Colorize;
use factorial_core::formatting::{format_report_with, FormatOptions};
use factorial_core::ExperimentReport;

/// Format a report for human-readable terminal output.
///
/// Arrays over 1000 elements are summarised.
pub fn format_report(report: &ExperimentReport) -> String {
    format_report_with(report, &FormatOptions::default())
}

/// Format a report printing every row of every array.
pub fn format_report_full(report: &ExperimentReport) -> String {
    format_report_with(report, &FormatOptions::full())
}

/// One-line shape summary for log output and assertion messages.
///
/// ```text
/// shapes: M (4, 2) | M+s (4, 2) | R (4, 1) | E (1, 2)
/// ```
pub fn format_shapes(report: &ExperimentReport) -> String {
    let labels = ["M", "M+s", "R", "E"];
    let parts: Vec<String> = labels
        .iter()
        .zip(report.shapes())
        .map(|(label, (rows, cols))| format!("{} ({}, {})", label, rows, cols))
        .collect();
    format!("{} {}", "shapes:".dimmed(), parts.join(" | "))
}

/// Check if an environment variable is set to a truthy value.
///
/// Returns true if the variable is set to "1", "true", or "yes" (case-insensitive).
fn env_is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Check if verbose output is enabled via `FACTORIAL_VERBOSE`.
pub fn is_verbose() -> bool {
    env_is_truthy("FACTORIAL_VERBOSE")
}
