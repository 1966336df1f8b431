//! @ai:module:intent Persist benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, ReportPaths, JsonReporter, MarkdownReporter

pub mod json_report;
pub mod markdown_report;

pub use json_report::{JsonReporter, JsonReporterTrait};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};

use crate::config::PathConfig;
use crate::error::Result;
use crate::metrics::{RunRecord, SummaryRecord};
use std::path::{Path, PathBuf};

/// @ai:intent Where each artifact of one run was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub detailed: PathBuf,
    pub summary: PathBuf,
    pub markdown: PathBuf,
}

impl ReportPaths {
    /// @ai:intent Resolve artifact file names inside an output directory
    /// @ai:effects pure
    pub fn in_dir(output_dir: &Path, paths: &PathConfig) -> Self {
        Self {
            detailed: output_dir.join(&paths.detailed_file),
            summary: output_dir.join(&paths.summary_file),
            markdown: output_dir.join(&paths.markdown_file),
        }
    }
}

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    json: JsonReporter,
    markdown: MarkdownReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
        }
    }

    /// @ai:intent Write raw records, then summaries, then the markdown table
    /// @ai:pre every (workload, tool) pair has finished
    /// @ai:effects fs:write
    pub fn generate_all(
        &self,
        records: &[RunRecord],
        summaries: &[SummaryRecord],
        output: &ReportPaths,
    ) -> Result<()> {
        if let Some(dir) = output.detailed.parent() {
            std::fs::create_dir_all(dir)?;
        }

        self.json.generate_raw(records, &output.detailed)?;
        tracing::info!("Raw results written to {}", output.detailed.display());

        self.write_summaries(records, summaries, output)
    }

    /// @ai:intent Write only the summary and markdown artifacts
    /// @ai:effects fs:write
    pub fn write_summaries(
        &self,
        records: &[RunRecord],
        summaries: &[SummaryRecord],
        output: &ReportPaths,
    ) -> Result<()> {
        if let Some(dir) = output.summary.parent() {
            std::fs::create_dir_all(dir)?;
        }

        self.json.generate_summary(summaries, &output.summary)?;
        tracing::info!("Summary written to {}", output.summary.display());

        self.markdown.generate(records, summaries, &output.markdown)?;
        tracing::info!("Markdown report written to {}", output.markdown.display());

        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_all_writes_three_artifacts() {
        let temp = TempDir::new().unwrap();
        let output = ReportPaths::in_dir(&temp.path().join("nested"), &PathConfig::default());

        let records = vec![RunRecord::success("cracken", "9digits", 0, 0.5)];
        let summaries = vec![SummaryRecord {
            bench: "9digits".to_string(),
            max: 0.5,
            mean: 0.5,
            min: 0.5,
            std: None,
            tool: "cracken".to_string(),
        }];

        ReportGenerator::new()
            .generate_all(&records, &summaries, &output)
            .unwrap();

        assert!(output.detailed.ends_with("bench_results_detailed.json"));
        assert!(output.detailed.exists());
        assert!(output.summary.exists());
        assert!(output.markdown.exists());
    }
}
