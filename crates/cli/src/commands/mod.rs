//! CLI commands

pub mod badge;
