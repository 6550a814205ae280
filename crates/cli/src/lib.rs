//! junit-badge CLI library — exposed for integration tests

pub mod commands;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

pub const ABOUT: &str =
    "Create endpoint badge json files from junit report. See https://shields.io/endpoint for details.";

#[derive(Parser, Debug)]
#[command(name = "junit-badge")]
#[command(about = ABOUT, long_about = None)]
#[command(version = junit_badge_core::VERSION)]
pub struct Cli {
    /// Path to a junit report
    pub report: PathBuf,

    /// Badge file to write (default: badge.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Badge label (default: tests)
    #[arg(long)]
    pub label: Option<String>,

    /// shields.io named logo, skips CI detection
    #[arg(long)]
    pub named_logo: Option<String>,

    /// Append the number of disabled tests to the message
    #[arg(long)]
    pub show_disabled: bool,

    /// Config file (default: nearest .junit-badge.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
