//! Configuration file parsing for .junit-badge.toml

use crate::badge::{DEFAULT_LABEL, DEFAULT_LOGO_COLOR};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".junit-badge.toml";

/// Main configuration structure for .junit-badge.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BadgeConfig {
    #[serde(default)]
    pub badge: BadgeSection,

    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BadgeSection {
    /// Text on the left side of the badge
    #[serde(default = "default_label")]
    pub label: String,

    /// Color of the named logo
    #[serde(default = "default_logo_color")]
    pub logo_color: String,

    /// Background of the label; omitted from the badge when unset
    #[serde(default)]
    pub label_color: Option<String>,

    /// Fixed logo, bypassing CI / host OS detection
    #[serde(default)]
    pub named_logo: Option<String>,

    /// Mention disabled tests in the message
    #[serde(default)]
    pub show_disabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Badge file, relative to the working directory
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_logo_color() -> String {
    DEFAULT_LOGO_COLOR.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("badge.json")
}

impl Default for BadgeSection {
    fn default() -> Self {
        Self {
            label: default_label(),
            logo_color: default_logo_color(),
            label_color: None,
            named_logo: None,
            show_disabled: false,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl BadgeConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: BadgeConfig = toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Find and load .junit-badge.toml from the start directory or ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }
}
