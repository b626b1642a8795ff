//! Score Sampling
//!
//! Draws standard-normal values and scales them onto each processor's target
//! distribution (`z * std_dev + mean`).
//!
//! Every [`Sampler`] owns its generator. Production runs seed from the clock;
//! tests and reproducible runs pass an explicit seed. [`Sampler::fork`] hands
//! out independently seeded children so each pipeline can own a generator,
//! which keeps results identical between sequential and parallel execution.

use crate::processor::ProcessorConfig;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use thiserror::Error;

/// Errors raised by sample containers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("sample set must contain at least one value")]
    EmptySamples,
}

/// Ordered, non-empty sequence of simulated scores
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    /// Wrap existing values, rejecting an empty vector
    pub fn from_values(values: Vec<f64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySamples);
        }
        Ok(Self { values })
    }

    /// Samples in generation order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples (always >= 1)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate samples in generation order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Take ownership of the underlying values
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for SampleSet {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Seed derived from the current UTC time in nanoseconds
pub fn time_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

/// Draw `config.sample_count()` scores from `N(mean, std_dev)` using `rng`
pub fn generate_samples<R: Rng + ?Sized>(config: &ProcessorConfig, rng: &mut R) -> SampleSet {
    let mean = config.mean();
    let std_dev = config.std_dev();

    let values = (0..config.sample_count())
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut *rng);
            z * std_dev + mean
        })
        .collect();

    // sample_count is NonZero, so the set is never empty
    SampleSet { values }
}

/// Normal-distribution score generator with an owned, explicitly seeded RNG
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    seed: u64,
}

impl Sampler {
    /// Deterministic sampler: equal seeds produce equal sequences
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Sampler seeded from the wall clock
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// Seed this sampler was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a fresh sample set for `config`
    pub fn generate(&mut self, config: &ProcessorConfig) -> SampleSet {
        generate_samples(config, &mut self.rng)
    }

    /// Derive an independently seeded child sampler.
    ///
    /// Children are a pure function of the parent seed and the number of
    /// previous forks.
    pub fn fork(&mut self) -> Sampler {
        Sampler::from_seed(self.rng.next_u64())
    }
}
