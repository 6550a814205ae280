//! Error types shared by the badge pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a badge run
#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("File not found: {}", .0.display())]
    ReportNotFound(PathBuf),

    #[error("Failed to read file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed parsing file at line={line}, column={column}.")]
    XmlSyntax { line: usize, column: usize },

    #[error("Failed to find count of tests, failures or disabled values.")]
    MissingCounts,

    #[error("Invalid value '{value}' for attribute '{name}': expected an integer.")]
    InvalidCount { name: &'static str, value: String },

    #[error("Failed to save {}.", file_name(.path))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
