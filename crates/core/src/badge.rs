//! Badge classification and the shields.io endpoint document
//!
//! See: https://shields.io/endpoint

use crate::error::BadgeError;
use crate::report::ReportSummary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_LABEL: &str = "tests";
pub const DEFAULT_LOGO_COLOR: &str = "white";

/// Severity of a test run, driven by the failure count alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn from_failures(failures: i64) -> Self {
        match failures {
            0 => Level::Success,
            1 => Level::Warning,
            _ => Level::Error,
        }
    }

    /// Hex color understood by shields.io
    pub fn color(self) -> &'static str {
        match self {
            Level::Success => "#4c1",    // brightgreen
            Level::Warning => "#fe7d37", // orange
            Level::Error => "#e05d44",   // red
        }
    }

    /// Human name of [`Level::color`]
    pub fn color_name(self) -> &'static str {
        match self {
            Level::Success => "green",
            Level::Warning => "orange",
            Level::Error => "red",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Success => write!(f, "success"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// Result of classifying a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub level: Level,
    pub color: &'static str,
    pub message: String,
}

/// Derive level, color and message from a report.
///
/// `disabled` only influences the message through `success`; it never
/// changes the level.
pub fn classify(summary: &ReportSummary) -> Classification {
    let level = Level::from_failures(summary.failures);
    let message = match level {
        Level::Success => format!("{} passed", summary.success()),
        Level::Warning | Level::Error => format!("{} failed", summary.failures),
    };

    Classification {
        level,
        color: level.color(),
        message,
    }
}

/// Endpoint badge document. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub schema_version: u32,
    pub named_logo: String,
    pub logo_color: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    pub color: String,
    pub message: String,
}

impl Badge {
    /// Badge with the default label and logo color
    pub fn new(classification: &Classification, named_logo: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            named_logo: named_logo.into(),
            logo_color: DEFAULT_LOGO_COLOR.to_string(),
            label: DEFAULT_LABEL.to_string(),
            label_color: None,
            color: classification.color.to_string(),
            message: classification.message.clone(),
        }
    }

    /// Append `, <n> disabled` to the message when any tests were disabled
    pub fn with_disabled_count(mut self, disabled: i64) -> Self {
        if disabled > 0 {
            self.message = format!("{}, {} disabled", self.message, disabled);
        }
        self
    }

    /// Pretty JSON with 2-space indentation and a trailing newline
    pub fn to_json(&self) -> String {
        // Plain strings and integers only; serialization cannot fail.
        let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
        json.push('\n');
        json
    }

    /// Write the badge to `path`, resolved against `cwd` when relative.
    ///
    /// Overwrites any existing file and returns the absolute path written.
    pub fn write_to(&self, path: &Path, cwd: &Path) -> Result<PathBuf, BadgeError> {
        let full_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };

        std::fs::write(&full_path, self.to_json()).map_err(|source| BadgeError::Write {
            path: full_path.clone(),
            source,
        })?;

        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_failures_are_errors() {
        assert_eq!(Level::from_failures(-1), Level::Error);
    }

    #[test]
    fn level_display() {
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Error.color_name(), "red");
    }
}
