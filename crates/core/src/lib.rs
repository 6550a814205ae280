//! junit-badge Core - JUnit report to shields.io endpoint badge
//!
//! This crate provides the building blocks used by the `junit-badge` CLI:
//! - Root-level count extraction from JUnit XML reports
//! - Severity classification and badge message derivation
//! - CI service / host OS detection for the badge logo
//! - Endpoint JSON serialization and `.junit-badge.toml` configuration

pub mod badge;
pub mod config;
pub mod environment;
pub mod error;
pub mod report;

pub use badge::{classify, Badge, Classification, Level};
pub use config::BadgeConfig;
pub use environment::{named_logo, Environment, HostOs, ProcessEnvironment, StaticEnvironment};
pub use error::BadgeError;
pub use report::{read_report, ReportSummary};

/// junit-badge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
