#![warn(missing_docs)]
//! benchsim Statistical Engine
//!
//! Generates synthetic benchmark scores and reduces them to a summary:
//! - Validated processor configurations (fail fast on zero sample counts)
//! - Normal-distribution sampling with an explicit, seedable generator
//! - Single-pass mean/min/max reduction with a bounded sample preview

mod processor;
mod sampler;
mod summary;

pub use processor::{ConfigError, ProcessorConfig};
pub use sampler::{SampleSet, Sampler, StatsError, generate_samples, time_seed};
pub use summary::{Summary, summarize};

/// Number of simulated scores generated per processor by default
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Maximum number of leading samples shown in a summary
pub const PREVIEW_LEN: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_SAMPLE_COUNT, 1000);
        assert_eq!(PREVIEW_LEN, 5);
    }
}
