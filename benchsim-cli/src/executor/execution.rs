//! Pipeline Execution
//!
//! Runs each processor pipeline (sample, summarize, write) and captures its
//! outcome. A failed artifact write is recorded on that pipeline's report and
//! never stops the others.
//!
//! ## Seeding
//!
//! ```text
//!   master seed (override or clock)
//!          │
//!          ▼
//!   master Sampler ──fork──► one Sampler per pipeline, in catalog order
//!          │
//!          ▼
//!   sequential iter / rayon into_par_iter (result order preserved)
//! ```
//!
//! Because children are forked before any pipeline runs, a given seed yields
//! the same artifacts in both modes.

use crate::catalog::Pipeline;
use benchsim_report::{ArtifactStatus, PipelineReport, RunReport, write_csv_artifact};
use benchsim_stats::{Sampler, summarize, time_seed};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Configuration for pipeline execution
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Master seed; drawn from the clock when `None`
    pub seed: Option<u64>,
    /// Run pipelines on the rayon pool
    pub parallel: bool,
    /// Directory that artifact file names are joined onto
    pub output_dir: PathBuf,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            parallel: false,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Run one pipeline with its own sampler
pub fn run_pipeline(pipeline: &Pipeline, mut sampler: Sampler, output_dir: &Path) -> PipelineReport {
    let config = &pipeline.config;
    let samples = sampler.generate(config);
    tracing::debug!(
        processor = config.name(),
        samples = samples.len(),
        seed = sampler.seed(),
        "generated samples"
    );

    let summary = summarize(config, &samples);
    let artifact = output_dir.join(&pipeline.artifact);

    let (status, error) = match write_csv_artifact(&artifact, config.name(), samples.as_slice()) {
        Ok(()) => {
            tracing::debug!(path = %artifact.display(), "artifact written");
            (ArtifactStatus::Written, None)
        }
        Err(e) => {
            tracing::warn!(processor = config.name(), error = %e, "artifact write failed");
            (ArtifactStatus::Failed, Some(e.to_string()))
        }
    };

    PipelineReport {
        label: pipeline.label.clone(),
        artifact,
        summary,
        status,
        error,
    }
}

/// Run every pipeline and collect one report entry per pipeline, in input order
pub fn execute_pipelines(pipelines: &[Pipeline], config: &ExecutionConfig) -> RunReport {
    let seed = config.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, pipelines = pipelines.len(), parallel = config.parallel, "starting run");

    let mut master = Sampler::from_seed(seed);
    let jobs: Vec<(&Pipeline, Sampler)> = pipelines.iter().map(|p| (p, master.fork())).collect();

    let reports: Vec<PipelineReport> = if config.parallel {
        jobs.into_par_iter()
            .map(|(pipeline, sampler)| run_pipeline(pipeline, sampler, &config.output_dir))
            .collect()
    } else {
        jobs.into_iter()
            .map(|(pipeline, sampler)| run_pipeline(pipeline, sampler, &config.output_dir))
            .collect()
    };

    RunReport::new(seed, config.parallel, reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchsim_stats::ProcessorConfig;

    fn flat(name: &str, mean: f64, n: usize, artifact: &str) -> Pipeline {
        Pipeline::new(
            ProcessorConfig::new(name.to_string(), mean, 0.0, n).unwrap(),
            name,
            artifact,
        )
    }

    fn noisy(name: &str, artifact: &str) -> Pipeline {
        Pipeline::new(
            ProcessorConfig::new(name.to_string(), 500.0, 3.0, 200).unwrap(),
            name,
            artifact,
        )
    }

    #[test]
    fn test_writes_one_artifact_per_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let pipelines = vec![flat("a", 1.0, 3, "a.csv"), flat("b", 2.0, 4, "b.csv")];
        let config = ExecutionConfig {
            seed: Some(1),
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let report = execute_pipelines(&pipelines, &config);

        assert_eq!(report.pipelines.len(), 2);
        assert_eq!(report.failed_artifacts(), 0);
        assert_eq!(report.meta.seed, 1);
        let b = std::fs::read_to_string(dir.path().join("b.csv")).unwrap();
        assert_eq!(b.lines().count(), 5);
        assert!(b.ends_with("b,4,2.00\n"));
    }

    #[test]
    fn test_failure_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let pipelines = vec![
            flat("first", 1.0, 5, "first.csv"),
            flat("broken", 2.0, 5, "no_such_dir/broken.csv"),
            flat("third", 3.0, 5, "third.csv"),
            flat("fourth", 4.0, 5, "fourth.csv"),
        ];
        let config = ExecutionConfig {
            seed: Some(9),
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let report = execute_pipelines(&pipelines, &config);

        assert_eq!(report.failed_artifacts(), 1);
        assert!(report.pipelines[1].is_failed());
        assert!(report.pipelines[1].error.is_some());
        // Summaries are still produced for the failed pipeline
        assert_eq!(report.pipelines[1].summary.mean, 2.0);
        for name in ["first.csv", "third.csv", "fourth.csv"] {
            assert!(dir.path().join(name).exists(), "{} missing", name);
        }
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let pipelines = vec![noisy("x", "x.csv"), noisy("y", "y.csv")];

        for dir in [&dir_a, &dir_b] {
            let config = ExecutionConfig {
                seed: Some(2024),
                output_dir: dir.path().to_path_buf(),
                ..Default::default()
            };
            execute_pipelines(&pipelines, &config);
        }

        for name in ["x.csv", "y.csv"] {
            let a = std::fs::read_to_string(dir_a.path().join(name)).unwrap();
            let b = std::fs::read_to_string(dir_b.path().join(name)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let pipelines: Vec<Pipeline> = (0..6)
            .map(|i| noisy(&format!("p{}", i), &format!("p{}.csv", i)))
            .collect();

        let sequential = execute_pipelines(
            &pipelines,
            &ExecutionConfig {
                seed: Some(77),
                parallel: false,
                output_dir: dir.path().to_path_buf(),
            },
        );
        let parallel = execute_pipelines(
            &pipelines,
            &ExecutionConfig {
                seed: Some(77),
                parallel: true,
                output_dir: dir.path().to_path_buf(),
            },
        );

        let summaries = |r: &RunReport| {
            r.pipelines
                .iter()
                .map(|p| p.summary.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(summaries(&sequential), summaries(&parallel));
        assert!(parallel.meta.parallel);
    }

    #[test]
    fn test_pipelines_get_distinct_streams() {
        let dir = tempfile::tempdir().unwrap();
        let pipelines = vec![noisy("same", "one.csv"), noisy("same", "two.csv")];
        let config = ExecutionConfig {
            seed: Some(5),
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let report = execute_pipelines(&pipelines, &config);
        assert_ne!(report.pipelines[0].summary.preview, report.pipelines[1].summary.preview);
    }
}
