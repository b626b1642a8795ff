//! Configuration loading from benchsim.toml
//!
//! benchsim run settings can be specified in a `benchsim.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.
//! Processor parameters are compiled in (see [`crate::catalog`]) and cannot be set here.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the discovered configuration file
pub const CONFIG_FILE_NAME: &str = "benchsim.toml";

/// benchsim configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchsimConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for simulation pipelines
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunnerConfig {
    /// Fixed master seed; time-derived when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Run pipelines on the rayon pool
    #[serde(default)]
    pub parallel: bool,
    /// Rayon threads (0 = all available cores)
    #[serde(default)]
    pub threads: usize,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the CSV artifacts
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Report format on stdout: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Exit non-zero when any artifact could not be written
    #[serde(default = "default_fail_on_write_error")]
    pub fail_on_write_error: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            format: default_format(),
            fail_on_write_error: default_fail_on_write_error(),
        }
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_format() -> String {
    "human".to_string()
}
fn default_fail_on_write_error() -> bool {
    true
}

impl BenchsimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable configuration"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# benchsim Configuration

[runner]
# Fixed master seed for reproducible artifacts (uncomment to enable)
# seed = 42
# Run processor pipelines in parallel
parallel = false
# Threads for parallel pipelines (0 = all cores)
threads = 0

[output]
# Directory for CSV artifacts (created if missing)
directory = "."
# Report format on stdout: human, json
format = "human"
# Exit non-zero when any artifact could not be written
fail_on_write_error = true
"#
        .to_string()
    }
}
