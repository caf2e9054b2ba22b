//! Configuration loading from exhibit.toml
//!
//! Exhibit configuration can be specified in an `exhibit.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file
pub const CONFIG_FILE: &str = "exhibit.toml";

/// Exhibit configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExhibitConfig {
    /// Member discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Member discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiscoveryConfig {
    /// Skip members that cannot be called with zero arguments instead of
    /// reporting them as failures
    #[serde(default)]
    pub strict: bool,
}

/// Stream that receives failure diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticStream {
    /// Standard error (default)
    #[default]
    Stderr,
    /// Standard output, interleaved with headers
    Stdout,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Where failure diagnostics are written: "stderr" or "stdout"
    #[serde(default)]
    pub diagnostics: DiagnosticStream,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunnerConfig {
    /// Exit with a non-zero status when any example failed
    #[serde(default)]
    pub fail_on_error: bool,
}

impl ExhibitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Locate the nearest `exhibit.toml` walking up from `start`
    pub fn find_from(start: impl Into<PathBuf>) -> Option<PathBuf> {
        let mut dir = start.into();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        let path = Self::find_from(dir)?;
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Exhibit Configuration

[discovery]
# Skip members that cannot be called with zero arguments
# (methods taking self or parameters, async, generic or unsafe functions)
# instead of reporting them as failures
strict = false

[output]
# Where failure diagnostics go: "stderr" or "stdout"
diagnostics = "stderr"

[runner]
# Exit with status 1 when any example failed
fail_on_error = false
"#
        .to_string()
    }
}
