//! CI service and host OS detection for the badge logo
//!
//! Everything goes through the [`Environment`] trait so detection can be
//! exercised without touching the real process environment.

use std::collections::HashMap;

/// Operating system the tool runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    Darwin,
    Linux,
    Windows,
    Other(String),
}

impl HostOs {
    /// Map a `std::env::consts::OS` value
    pub fn from_target_os(os: &str) -> Self {
        match os {
            "macos" => HostOs::Darwin,
            "linux" => HostOs::Linux,
            "windows" => HostOs::Windows,
            other => HostOs::Other(other.to_string()),
        }
    }
}

/// Read-only view of the process environment
pub trait Environment {
    /// Value of an environment variable, if present
    fn var(&self, key: &str) -> Option<String>;

    /// Operating system of the host
    fn host_os(&self) -> HostOs;

    /// A variable is set when present and non-empty
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some_and(|v| !v.is_empty())
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn host_os(&self) -> HostOs {
        HostOs::from_target_os(std::env::consts::OS)
    }
}

/// Fixed environment, mostly useful in tests
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
    os: HostOs,
}

impl StaticEnvironment {
    pub fn new(os: HostOs) -> Self {
        Self {
            vars: HashMap::new(),
            os,
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn host_os(&self) -> HostOs {
        self.os.clone()
    }
}

/// Pick the shields.io `namedLogo` for the current CI service or host OS.
///
/// First match wins: AppVeyor, Travis CI, Jenkins, GitHub Actions (by
/// runner OS), then the host OS. Returns an empty string when nothing is
/// recognized.
pub fn named_logo(env: &dyn Environment) -> String {
    let logo = if env.is_set("APPVEYOR") {
        "AppVeyor"
    } else if env.is_set("TRAVIS") {
        "Travis CI"
    } else if env.is_set("JENKINS_URL") {
        "Jenkins"
    } else if env.is_set("GITHUB_ACTIONS") {
        match env.var("RUNNER_OS").as_deref() {
            Some("macOS") => "Apple",
            Some("Linux") => "Linux",
            Some("Windows") => "Windows",
            _ => "GitHub",
        }
    } else {
        match env.host_os() {
            HostOs::Darwin => "Apple",
            HostOs::Linux => "Linux",
            HostOs::Windows => "Windows",
            HostOs::Other(_) => "",
        }
    };

    logo.to_string()
}
