//! Simulation Executor
//!
//! Runs processor pipelines and renders their results.
//!
//! ## Pipeline Overview
//!
//! ```text
//! CatalogEntry (compiled in)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Sample → summarize → write CSV, per processor
//! └──────┬──────┘
//!        │
//!        ▼
//!    RunReport
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output (JSON lives in benchsim-report)
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Pipeline execution, sequential or on the rayon pool
//! - [`formatting`] - Human-readable output formatting

mod execution;
mod formatting;

// Re-export public API
pub use execution::{ExecutionConfig, execute_pipelines, run_pipeline};
pub use formatting::format_human_output;
