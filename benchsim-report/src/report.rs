//! Report Data Structures

use benchsim_stats::Summary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Complete simulation run report
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub meta: RunMeta,
    pub pipelines: Vec<PipelineReport>,
}

/// Run metadata
#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Master seed; rerunning with it reproduces every artifact
    pub seed: u64,
    pub parallel: bool,
}

/// Outcome of one processor's sample -> summarize -> write pipeline
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Short label used in write confirmations
    pub label: String,
    /// Artifact destination
    pub artifact: PathBuf,
    pub summary: Summary,
    pub status: ArtifactStatus,
    /// Diagnostic when the artifact could not be written
    pub error: Option<String>,
}

/// Whether a pipeline's artifact reached disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    Written,
    Failed,
}

impl PipelineReport {
    /// True when the artifact could not be written
    pub fn is_failed(&self) -> bool {
        self.status == ArtifactStatus::Failed
    }
}

impl RunReport {
    /// Build a report stamped with the current time
    pub fn new(seed: u64, parallel: bool, pipelines: Vec<PipelineReport>) -> Self {
        Self {
            meta: RunMeta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: Utc::now(),
                seed,
                parallel,
            },
            pipelines,
        }
    }

    /// Number of pipelines whose artifact could not be written
    pub fn failed_artifacts(&self) -> usize {
        self.pipelines.iter().filter(|p| p.is_failed()).count()
    }
}
