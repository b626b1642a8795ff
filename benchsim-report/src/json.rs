//! JSON Output

use crate::report::RunReport;

/// Generate a prettified JSON report.
///
/// Serializes the run report, including every summary and artifact outcome.
pub fn generate_json_report(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
