//! CSV Artifacts
//!
//! One artifact per processor: a header row, then one `label,ordinal,score`
//! row per sample. Scores are fixed-point with two decimals, whatever their
//! magnitude.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Header row written at the top of every artifact
pub const CSV_HEADER: [&str; 3] = ["Processor", "Simulation_Number", "Benchmark_Score"];

/// Failure to produce an artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ArtifactError {
    /// Path of the artifact that could not be written
    pub fn path(&self) -> &Path {
        match self {
            ArtifactError::Create { path, .. } | ArtifactError::Write { path, .. } => path,
        }
    }
}

/// Quote a field when it would otherwise break the row
fn escape_field(field: &str) -> Cow<'_, str> {
    let needs_quotes = field.contains([',', '"', '\r', '\n'])
        || field.starts_with(char::is_whitespace);

    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Serialize `samples` as CSV rows labelled with `label`, then flush `writer`
pub fn write_csv<W: Write>(mut writer: W, label: &str, samples: &[f64]) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER.join(","))?;

    let label = escape_field(label);
    for (i, score) in samples.iter().enumerate() {
        writeln!(writer, "{},{},{:.2}", label, i + 1, score)?;
    }

    writer.flush()
}

/// Create (or truncate) `path` and write the artifact to it.
///
/// Parent directories are not created. The file handle is released on every
/// return path; a failure part-way through may leave a truncated file.
pub fn write_csv_artifact(path: &Path, label: &str, samples: &[f64]) -> Result<(), ArtifactError> {
    let file = File::create(path).map_err(|source| ArtifactError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    // BufWriter flushes on drop if write_csv bails out early
    write_csv(BufWriter::new(file), label, samples).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })
}
