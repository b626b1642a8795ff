//! Processor Catalog
//!
//! Compiled-in processor configurations. The executor iterates this table
//! uniformly; adding a processor means adding an entry, nothing else.

use benchsim_stats::{ConfigError, DEFAULT_SAMPLE_COUNT, ProcessorConfig};
use std::path::PathBuf;

/// Static description of one processor pipeline
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Display name, also written to the CSV label column
    pub name: &'static str,
    /// Short label for write confirmations
    pub label: &'static str,
    /// Target mean score
    pub mean: f64,
    /// Target standard deviation
    pub std_dev: f64,
    /// Scores to generate
    pub sample_count: usize,
    /// Artifact file name, relative to the output directory
    pub artifact: &'static str,
}

/// JetStream2 and OpenSSL 3.3 AES-256-GCM scores for two Ryzen 7 parts
pub const BUILTIN_PROCESSORS: [CatalogEntry; 4] = [
    CatalogEntry {
        name: "AMD Ryzen 7 8700G @ 5.18GHz (JetStream2)",
        label: "Ryzen 7 8700G JetStream2",
        mean: 370.28,
        std_dev: 1.11,
        sample_count: DEFAULT_SAMPLE_COUNT,
        artifact: "ryzen8700G_jetstream2_results.csv",
    },
    CatalogEntry {
        name: "AMD Ryzen 7 7700X @ 5.57GHz (JetStream2)",
        label: "Ryzen 7 7700X JetStream2",
        mean: 405.31,
        std_dev: 0.68,
        sample_count: DEFAULT_SAMPLE_COUNT,
        artifact: "ryzen7700X_jetstream2_results.csv",
    },
    CatalogEntry {
        name: "AMD Ryzen 7 8700G @ 5.18GHz (OpenSSL 3.3 AES-256-GCM)",
        label: "Ryzen 7 8700G OpenSSL",
        mean: 103_716_166_770.0,
        std_dev: 69_039_683.61,
        sample_count: DEFAULT_SAMPLE_COUNT,
        artifact: "ryzen8700G_openssl_results.csv",
    },
    CatalogEntry {
        name: "AMD Ryzen 7 7700X @ 5.57GHz (OpenSSL 3.3 AES-256-GCM)",
        label: "Ryzen 7 7700X OpenSSL",
        mean: 116_859_009_887.0,
        std_dev: 36_966_056.95,
        sample_count: DEFAULT_SAMPLE_COUNT,
        artifact: "ryzen7700X_openssl_results.csv",
    },
];

/// A validated processor configuration plus where its artifact goes
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub config: ProcessorConfig,
    pub label: String,
    /// Artifact file name, joined onto the output directory at run time
    pub artifact: PathBuf,
}

impl Pipeline {
    /// Build a pipeline from parts
    pub fn new(
        config: ProcessorConfig,
        label: impl Into<String>,
        artifact: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            label: label.into(),
            artifact: artifact.into(),
        }
    }
}

impl TryFrom<&CatalogEntry> for Pipeline {
    type Error = ConfigError;

    fn try_from(entry: &CatalogEntry) -> Result<Self, Self::Error> {
        let config =
            ProcessorConfig::new(entry.name, entry.mean, entry.std_dev, entry.sample_count)?;
        Ok(Pipeline::new(config, entry.label, entry.artifact))
    }
}

/// Validate every catalog entry into a runnable pipeline
pub fn builtin_pipelines() -> Result<Vec<Pipeline>, ConfigError> {
    BUILTIN_PROCESSORS.iter().map(Pipeline::try_from).collect()
}
