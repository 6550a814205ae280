//! Badge command — wires report parsing, classification, logo detection and
//! the writer together

use anyhow::Result;
use junit_badge_core::{
    classify, named_logo, read_report, Badge, BadgeConfig, Environment, ReportSummary,
};
use std::path::{Path, PathBuf};

use crate::output::terminal;
use crate::Cli;

/// Run a badge conversion. Relative paths resolve against `cwd`.
///
/// Returns the absolute path of the badge that was written.
pub fn run(cli: &Cli, env: &dyn Environment, cwd: &Path) -> Result<PathBuf> {
    // ── 1. Config ────────────────────────────────────────────────
    let config = match &cli.config {
        Some(path) => BadgeConfig::from_file(&cwd.join(path))?,
        None => BadgeConfig::find_and_load(cwd)?,
    };

    // ── 2. Report ────────────────────────────────────────────────
    let xml = read_report(&cwd.join(&cli.report))?;

    println!("{}", terminal::format_source(&cli.report));

    let summary = ReportSummary::parse(&xml)?;
    println!("{}", terminal::format_summary(&summary));

    // ── 3. Badge ─────────────────────────────────────────────────
    let classification = classify(&summary);
    let logo = cli
        .named_logo
        .clone()
        .or_else(|| config.badge.named_logo.clone())
        .unwrap_or_else(|| named_logo(env));

    let mut badge = Badge::new(&classification, logo);
    badge.label = cli
        .label
        .clone()
        .unwrap_or_else(|| config.badge.label.clone());
    badge.logo_color = config.badge.logo_color.clone();
    badge.label_color = config.badge.label_color.clone();
    if cli.show_disabled || config.badge.show_disabled {
        badge = badge.with_disabled_count(summary.disabled);
    }

    terminal::print_badge(&badge, classification.level);

    // ── 4. Write ─────────────────────────────────────────────────
    let output = cli.output.as_ref().unwrap_or(&config.output.path);
    let full_path = badge.write_to(output, cwd)?;

    terminal::print_saved(&full_path);

    Ok(full_path)
}
