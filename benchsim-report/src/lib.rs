#![warn(missing_docs)]
//! benchsim Report - Artifacts and Run Reports
//!
//! Generates the run's outputs:
//! - CSV artifacts (one per processor, one row per simulated score)
//! - JSON (machine-readable run report)
//!
//! Human-readable terminal output is assembled by the CLI from the same
//! [`RunReport`].

mod csv;
mod json;
mod report;

pub use csv::{ArtifactError, CSV_HEADER, write_csv, write_csv_artifact};
pub use json::generate_json_report;
pub use report::{ArtifactStatus, PipelineReport, RunMeta, RunReport};

/// Output format selection for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON run report
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
