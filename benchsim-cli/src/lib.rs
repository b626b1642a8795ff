#![warn(missing_docs)]
//! benchsim CLI Library
//!
//! Drives the compiled-in processor catalog through the sample, summarize and
//! write pipeline, prints the run report, and applies the exit policy.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     benchsim_cli::run()
//! }
//! ```

pub mod catalog;
mod config;
mod executor;

pub use catalog::{BUILTIN_PROCESSORS, CatalogEntry, Pipeline, builtin_pipelines};
pub use config::*;
pub use executor::{ExecutionConfig, execute_pipelines, format_human_output, run_pipeline};

use benchsim_report::{OutputFormat, RunReport, generate_json_report};
use clap::{Parser, Subcommand};
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;

/// benchsim CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchsim")]
#[command(author, version, about = "benchsim - synthetic processor benchmark scores")]
pub struct Cli {
    /// Optional subcommand (Run, List, Config); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fixed master seed for reproducible artifacts
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Directory for CSV artifacts
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Report format on stdout: human, json
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Run processor pipelines in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Number of threads for parallel pipelines
    /// 0 = use all available cores
    #[arg(long, short = 'j', global = true)]
    pub threads: Option<usize>,

    /// Exit successfully even if some artifacts could not be written
    #[arg(long, global = true)]
    pub allow_write_failures: bool,

    /// Configuration file (default: discover benchsim.toml upwards)
    #[arg(long = "config", global = true)]
    pub config_path: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all processor simulations (default)
    Run,
    /// List the compiled-in processor configurations
    List,
    /// Print a default benchsim.toml
    Config,
}

/// Run the benchsim CLI with the given arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if configuration is invalid or,
/// unless write failures are allowed, any artifact could not be written.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the benchsim CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging; stdout carries the report
    let filter = if cli.verbose {
        "benchsim=debug"
    } else {
        "benchsim=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Some(Commands::List) => list_processors(),
        Some(Commands::Config) => {
            print!("{}", BenchsimConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            let config = load_config(&cli)?;
            run_simulations(&cli, &config)
        }
    }
}

/// Explicit `--config` must load; a discovered file is best-effort.
fn load_config(cli: &Cli) -> anyhow::Result<BenchsimConfig> {
    match &cli.config_path {
        Some(path) => BenchsimConfig::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e)),
        None => Ok(BenchsimConfig::discover().unwrap_or_default()),
    }
}

fn list_processors() -> anyhow::Result<()> {
    println!("benchsim processors:");
    for entry in &BUILTIN_PROCESSORS {
        println!("├── {}", entry.name);
        println!(
            "│   ├── mean: {:.2}  std_dev: {:.2}  samples: {}",
            entry.mean, entry.std_dev, entry.sample_count
        );
        println!("│   └── artifact: {}", entry.artifact);
    }
    println!("{} processors.", BUILTIN_PROCESSORS.len());
    Ok(())
}

/// Build an ExecutionConfig by layering: benchsim.toml defaults → CLI overrides.
fn build_execution_config(cli: &Cli, config: &BenchsimConfig) -> ExecutionConfig {
    ExecutionConfig {
        seed: cli.seed.or(config.runner.seed),
        parallel: cli.parallel || config.runner.parallel,
        output_dir: cli
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.directory)),
    }
}

fn run_simulations(cli: &Cli, config: &BenchsimConfig) -> anyhow::Result<()> {
    let format_str = cli.format.as_deref().unwrap_or(&config.output.format);
    let format: OutputFormat = format_str.parse().map_err(anyhow::Error::msg)?;

    let exec_config = build_execution_config(cli, config);

    let threads = cli.threads.unwrap_or(config.runner.threads);
    if exec_config.parallel && threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }

    // Artifacts go straight into this directory; the writer never creates parents
    if let Err(e) = std::fs::create_dir_all(&exec_config.output_dir) {
        tracing::warn!(
            path = %exec_config.output_dir.display(),
            error = %e,
            "could not create output directory"
        );
    }

    let pipelines = builtin_pipelines()?;
    let report = execute_pipelines(&pipelines, &exec_config);

    match format {
        OutputFormat::Human => print!("{}", format_human_output(&report)),
        OutputFormat::Json => println!("{}", generate_json_report(&report)?),
    }

    let fail_on_write_error = config.output.fail_on_write_error && !cli.allow_write_failures;
    check_exit_status(&report, fail_on_write_error)
}

/// Turn artifact failures into a process error once every pipeline has reported.
pub fn check_exit_status(report: &RunReport, fail_on_write_error: bool) -> anyhow::Result<()> {
    let failed = report.failed_artifacts();
    if failed > 0 && fail_on_write_error {
        anyhow::bail!(
            "{} of {} artifacts could not be written",
            failed,
            report.pipelines.len()
        );
    }
    Ok(())
}
