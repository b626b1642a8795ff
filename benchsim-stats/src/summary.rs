//! Summary Statistics
//!
//! Reduces a sample set to its realized mean and extremes in one pass, and
//! keeps the first few samples in generation order for display.

use crate::PREVIEW_LEN;
use crate::processor::ProcessorConfig;
use crate::sampler::SampleSet;
use serde::Serialize;
use std::fmt;

/// Realized statistics for one processor's sample set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Processor display name
    pub processor: String,
    /// Mean the samples were drawn around
    pub target_mean: f64,
    /// Arithmetic mean of the samples
    pub mean: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Number of samples reduced
    pub sample_count: usize,
    /// Up to [`PREVIEW_LEN`] leading samples, in generation order
    pub preview: Vec<f64>,
}

/// Compute mean, min and max with a single linear scan.
///
/// The preview is bounded by the sample count, so sets shorter than
/// [`PREVIEW_LEN`] show every sample.
pub fn summarize(config: &ProcessorConfig, samples: &SampleSet) -> Summary {
    let values = samples.as_slice();
    let first = values[0];

    let (sum, min, max) = values[1..]
        .iter()
        .fold((first, first, first), |(sum, min, max), &v| {
            (sum + v, min.min(v), max.max(v))
        });

    Summary {
        processor: config.name().to_string(),
        target_mean: config.mean(),
        mean: sum / values.len() as f64,
        min,
        max,
        sample_count: values.len(),
        preview: values.iter().take(PREVIEW_LEN).copied().collect(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for {}:", self.processor)?;
        writeln!(
            f,
            "Simulated Mean: {:.2} (Target Mean: {:.2})",
            self.mean, self.target_mean
        )?;
        writeln!(f, "Minimum Value: {:.2}", self.min)?;
        writeln!(f, "Maximum Value: {:.2}", self.max)?;

        let preview: Vec<String> = self.preview.iter().map(|v| format!("{:.2}", v)).collect();
        writeln!(f, "Sample Results: {}", preview.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize_values(values: Vec<f64>) -> Summary {
        let config = ProcessorConfig::new("X", 100.0, 0.0, values.len()).unwrap();
        summarize(&config, &SampleSet::from_values(values).unwrap())
    }

    #[test]
    fn test_basic_summary() {
        let summary = summarize_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.sample_count, 5);
        assert_eq!(summary.target_mean, 100.0);
    }

    #[test]
    fn test_extremes_match_sorted_oracle() {
        let values = vec![3.5, -2.25, 9.0, 0.0, 9.0, -7.75, 4.125, 1.0];
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let summary = summarize_values(values);
        assert_eq!(summary.min, sorted[0]);
        assert_eq!(summary.max, sorted[sorted.len() - 1]);
    }

    #[test]
    fn test_mean_matches_independent_sum() {
        let values: Vec<f64> = (0..1000).map(|i| 370.28 + (i as f64 * 0.37).sin()).collect();
        let expected = values.iter().sum::<f64>() / values.len() as f64;

        let summary = summarize_values(values);
        assert!(((summary.mean - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn test_preview_keeps_generation_order() {
        let summary = summarize_values(vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0, -1.0]);
        assert_eq!(summary.preview, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_single_sample_preview() {
        let summary = summarize_values(vec![42.0]);
        assert_eq!(summary.preview, vec![42.0]);
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
        assert!(summary.to_string().ends_with("Sample Results: 42.00\n"));
    }

    #[test]
    fn test_display_format() {
        let summary = summarize_values(vec![100.0; 5]);
        assert_eq!(
            summary.to_string(),
            "Results for X:\n\
             Simulated Mean: 100.00 (Target Mean: 100.00)\n\
             Minimum Value: 100.00\n\
             Maximum Value: 100.00\n\
             Sample Results: 100.00, 100.00, 100.00, 100.00, 100.00\n"
        );
    }

    #[test]
    fn test_display_large_values_fixed_point() {
        let config = ProcessorConfig::new("ssl", 116_859_009_887.0, 0.0, 1).unwrap();
        let samples = SampleSet::from_values(vec![116_859_009_887.0]).unwrap();
        let text = summarize(&config, &samples).to_string();

        assert!(text.contains("Simulated Mean: 116859009887.00 (Target Mean: 116859009887.00)"));
        assert!(text.contains("Maximum Value: 116859009887.00\n"));
    }
}
