//! Output Formatting
//!
//! Human-readable output for a simulation run: every processor's summary,
//! then one confirmation or diagnostic line per artifact.

use benchsim_report::{ArtifactStatus, RunReport};
use std::fmt::Write;

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &RunReport) -> String {
    let mut output = String::new();

    for pipeline in &report.pipelines {
        // Summary Display ends with a newline; the blank line separates processors
        let _ = writeln!(output, "{}", pipeline.summary);
    }

    for pipeline in &report.pipelines {
        match pipeline.status {
            ArtifactStatus::Written => {
                let _ = writeln!(
                    output,
                    "{} results written to {}",
                    pipeline.label,
                    pipeline.artifact.display()
                );
            }
            ArtifactStatus::Failed => {
                let _ = writeln!(
                    output,
                    "Error writing {} results: {}",
                    pipeline.label,
                    pipeline.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchsim_report::PipelineReport;
    use benchsim_stats::Summary;
    use std::path::PathBuf;

    fn pipeline(label: &str, error: Option<&str>) -> PipelineReport {
        PipelineReport {
            label: label.to_string(),
            artifact: PathBuf::from(format!("{}.csv", label)),
            summary: Summary {
                processor: format!("{} cpu", label),
                target_mean: 10.0,
                mean: 10.0,
                min: 9.5,
                max: 10.5,
                sample_count: 2,
                preview: vec![9.5, 10.5],
            },
            status: if error.is_some() {
                ArtifactStatus::Failed
            } else {
                ArtifactStatus::Written
            },
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_summaries_then_write_lines() {
        let report = RunReport::new(
            1,
            false,
            vec![pipeline("a", None), pipeline("b", Some("disk full"))],
        );

        let output = format_human_output(&report);
        assert_eq!(
            output,
            "Results for a cpu:\n\
             Simulated Mean: 10.00 (Target Mean: 10.00)\n\
             Minimum Value: 9.50\n\
             Maximum Value: 10.50\n\
             Sample Results: 9.50, 10.50\n\
             \n\
             Results for b cpu:\n\
             Simulated Mean: 10.00 (Target Mean: 10.00)\n\
             Minimum Value: 9.50\n\
             Maximum Value: 10.50\n\
             Sample Results: 9.50, 10.50\n\
             \n\
             a results written to a.csv\n\
             Error writing b results: disk full\n"
        );
    }
}
