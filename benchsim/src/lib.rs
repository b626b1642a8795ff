#![warn(missing_docs)]
//! # benchsim
//!
//! Generates synthetic benchmark-score datasets for hardware processor
//! configurations:
//! - **Sampling**: scores drawn from a per-processor normal distribution, with an
//!   explicit generator that can be seeded for reproducible runs
//! - **Summaries**: realized mean, minimum, maximum and a short sample preview
//! - **Artifacts**: one CSV file per processor, one row per simulated score
//! - **Isolation**: a failed artifact write is reported without stopping the
//!   remaining processors
//!
//! ## Quick Start
//!
//! ```ignore
//! use benchsim::{ProcessorConfig, Sampler, summarize, write_csv_artifact};
//!
//! let config = ProcessorConfig::new("My CPU (JetStream2)", 370.28, 1.11, 1000)?;
//! let samples = Sampler::from_seed(42).generate(&config);
//! println!("{}", summarize(&config, &samples));
//! write_csv_artifact("my_cpu.csv".as_ref(), config.name(), samples.as_slice())?;
//! ```

// Re-export stats
pub use benchsim_stats::{
    ConfigError, DEFAULT_SAMPLE_COUNT, PREVIEW_LEN, ProcessorConfig, SampleSet, Sampler,
    StatsError, Summary, generate_samples, summarize, time_seed,
};

// Re-export report types
pub use benchsim_report::{
    ArtifactError, ArtifactStatus, CSV_HEADER, OutputFormat, PipelineReport, RunMeta, RunReport,
    generate_json_report, write_csv, write_csv_artifact,
};

// Re-export driver types
pub use benchsim_cli::{
    BUILTIN_PROCESSORS, BenchsimConfig, CatalogEntry, ExecutionConfig, Pipeline,
    builtin_pipelines, check_exit_status, execute_pipelines, format_human_output,
};

/// Run the benchsim CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     benchsim::run()
/// }
/// ```
pub use benchsim_cli::run;
