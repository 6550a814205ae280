//! Terminal output formatting
//!
//! Formatters return plain text; the `print_*` helpers add color.

use colored::Colorize;
use junit_badge_core::{Badge, Level, ReportSummary};
use std::path::Path;

pub const USAGE_HINT: &str = "Missing input file. Please specify a path to a junit report.";

pub fn banner() -> String {
    format!("junit-badge v{}", junit_badge_core::VERSION)
}

pub fn format_source(report: &Path) -> String {
    format!(
        "Creating badge from junit report '{}' for https://shields.io/endpoint",
        report.display()
    )
}

pub fn format_summary(summary: &ReportSummary) -> String {
    format!(
        "Found {} tests: {} success, {} failures and {} disabled tests.",
        summary.tests,
        summary.success(),
        summary.failures,
        summary.disabled
    )
}

pub fn format_badge(badge: &Badge, level: Level) -> String {
    format!(
        "Creating badge: {}, {}, {}",
        badge.named_logo,
        level.color_name(),
        badge.message
    )
}

pub fn format_saved(path: &Path) -> String {
    format!("Saved badge as {}", path.display())
}

pub fn print_banner() {
    println!("{}", banner().bold());
}

pub fn print_badge(badge: &Badge, level: Level) {
    let line = format_badge(badge, level);
    let line = match level {
        Level::Success => line.green(),
        Level::Warning => line.yellow(),
        Level::Error => line.red(),
    };
    println!("{}", line);
}

pub fn print_saved(path: &Path) {
    println!("{}", format_saved(path).green());
}

pub fn print_error(message: &str) {
    println!("{}", message.red());
}
