//! Processor Configuration
//!
//! A processor configuration names one hardware/benchmark pairing and the
//! normal distribution its scores are drawn from. Invalid parameters are
//! rejected at construction so the sampler never sees them.

use std::borrow::Cow;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Errors raised while constructing a [`ProcessorConfig`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name}: sample count must be at least 1")]
    ZeroSampleCount { name: String },

    #[error("{name}: mean must be finite, got {mean}")]
    NonFiniteMean { name: String, mean: f64 },

    #[error("{name}: standard deviation must be finite and non-negative, got {std_dev}")]
    InvalidStdDev { name: String, std_dev: f64 },
}

/// Immutable parameters for one simulated processor
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorConfig {
    name: Cow<'static, str>,
    mean: f64,
    std_dev: f64,
    sample_count: NonZeroUsize,
}

impl ProcessorConfig {
    /// Validate and build a configuration.
    ///
    /// `mean` must be finite, `std_dev` finite and `>= 0`, `sample_count >= 1`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        mean: f64,
        std_dev: f64,
        sample_count: usize,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        let Some(sample_count) = NonZeroUsize::new(sample_count) else {
            return Err(ConfigError::ZeroSampleCount {
                name: name.into_owned(),
            });
        };
        if !mean.is_finite() {
            return Err(ConfigError::NonFiniteMean {
                name: name.into_owned(),
                mean,
            });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ConfigError::InvalidStdDev {
                name: name.into_owned(),
                std_dev,
            });
        }

        Ok(Self {
            name,
            mean,
            std_dev,
            sample_count,
        })
    }

    /// Display name (hardware and benchmark)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target mean of the score distribution
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Target standard deviation of the score distribution
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Number of scores to generate
    pub fn sample_count(&self) -> usize {
        self.sample_count.get()
    }
}
