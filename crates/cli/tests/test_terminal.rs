use junit_badge_cli::output::terminal::{
    format_badge, format_saved, format_source, format_summary,
};
use junit_badge_core::{classify, Badge, ReportSummary};
use std::path::Path;

#[test]
fn summary_line() {
    let summary = ReportSummary::new(10, 0, 1);
    assert_eq!(
        format_summary(&summary),
        "Found 10 tests: 9 success, 0 failures and 1 disabled tests."
    );
}

#[test]
fn source_line() {
    assert_eq!(
        format_source(Path::new("build/test_detail.xml")),
        "Creating badge from junit report 'build/test_detail.xml' for https://shields.io/endpoint"
    );
}

#[test]
fn badge_line_uses_color_name() {
    let c = classify(&ReportSummary::new(5, 2, 0));
    let badge = Badge::new(&c, "Linux");
    assert_eq!(format_badge(&badge, c.level), "Creating badge: Linux, red, 2 failed");
}

#[test]
fn badge_line_without_logo() {
    let c = classify(&ReportSummary::new(3, 1, 0));
    let badge = Badge::new(&c, "");
    assert_eq!(format_badge(&badge, c.level), "Creating badge: , orange, 1 failed");
}

#[test]
fn saved_line() {
    assert_eq!(
        format_saved(Path::new("/work/badge.json")),
        "Saved badge as /work/badge.json"
    );
}
