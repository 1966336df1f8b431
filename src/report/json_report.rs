//! @ai:module:intent JSON artifacts for raw runs and summaries
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, JsonReporterTrait
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::{RunRecord, SummaryRecord};
use serde::Serialize;
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Write every run record as a JSON array
    fn generate_raw(&self, records: &[RunRecord], output_path: &Path) -> Result<()>;

    /// @ai:intent Write every summary record as a JSON array
    fn generate_summary(&self, summaries: &[SummaryRecord], output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates pretty-printed JSON documents, one entry per record
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Serialize a record slice to a file
    /// @ai:effects fs:write
    fn write_array<T: Serialize>(rows: &[T], output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }

    /// @ai:intent Read a raw run artifact back
    /// @ai:effects fs:read
    pub fn load_raw(path: &Path) -> Result<Vec<RunRecord>> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    fn generate_raw(&self, records: &[RunRecord], output_path: &Path) -> Result<()> {
        Self::write_array(records, output_path)
    }

    fn generate_summary(&self, summaries: &[SummaryRecord], output_path: &Path) -> Result<()> {
        Self::write_array(summaries, output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_raw_report_reloads() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("bench_results_detailed.json");

        let records = vec![
            RunRecord::success("cracken", "9digits", 0, 0.25),
            RunRecord::failure("crunch", "9digits", 0),
        ];

        reporter.generate_raw(&records, &output).unwrap();
        assert_eq!(JsonReporter::load_raw(&output).unwrap(), records);
    }

    #[test]
    fn test_summary_report_is_array_of_objects() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("bench_results.json");

        let summaries = vec![SummaryRecord {
            bench: "9digits".to_string(),
            max: 1.0,
            mean: 0.75,
            min: 0.5,
            std: Some(0.35),
            tool: "cracken".to_string(),
        }];

        reporter.generate_summary(&summaries, &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 1);

        let keys: Vec<_> = rows[0].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["bench", "max", "mean", "min", "std", "tool"]);
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing-dir").join("out.json");

        assert!(reporter.generate_raw(&[], &output).is_err());
    }
}
