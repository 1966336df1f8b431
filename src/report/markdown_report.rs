//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter, MarkdownReporterTrait
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::{RunRecord, SummaryRecord};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from records and summaries
    fn generate(
        &self,
        records: &[RunRecord],
        summaries: &[SummaryRecord],
        output_path: &Path,
    ) -> Result<()>;
}

/// @ai:intent Generates one comparison table per workload
pub struct MarkdownReporter;

/// Successful run count and whether the pair ended in a failure
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PairRuns {
    successful: u32,
    failed: bool,
}

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Count runs per (bench, tool) from the raw records
    /// @ai:effects pure
    fn count_runs(records: &[RunRecord]) -> BTreeMap<(&str, &str), PairRuns> {
        let mut runs: BTreeMap<(&str, &str), PairRuns> = BTreeMap::new();

        for record in records {
            let entry = runs
                .entry((record.bench.as_str(), record.tool.as_str()))
                .or_default();

            if record.ok {
                entry.successful += 1;
            } else {
                entry.failed = true;
            }
        }

        runs
    }

    /// @ai:intent Format an optional std column
    /// @ai:effects pure
    fn format_std(std: Option<f64>) -> String {
        std.map(|s| format!("{:.4}", s))
            .unwrap_or_else(|| "-".to_string())
    }

    /// @ai:intent Render the full report
    /// @ai:effects pure
    fn render(records: &[RunRecord], summaries: &[SummaryRecord]) -> String {
        let runs = Self::count_runs(records);
        let benches: BTreeSet<&str> = runs.keys().map(|(bench, _)| *bench).collect();
        let mut output = String::new();

        writeln!(output, "# Wordlist Generation Benchmark").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Times in seconds.").unwrap();

        for bench in benches {
            writeln!(output).unwrap();
            writeln!(output, "## {}", bench).unwrap();
            writeln!(output).unwrap();
            writeln!(output, "| Tool | Runs | Mean | Std | Min | Max |").unwrap();
            writeln!(output, "|------|------|------|-----|-----|-----|").unwrap();

            for ((_, tool), pair) in runs.iter().filter(|((b, _), _)| *b == bench) {
                let summary = summaries
                    .iter()
                    .find(|s| s.bench == bench && s.tool == *tool);

                let runs_cell = if pair.failed {
                    format!("{} (failed)", pair.successful)
                } else {
                    pair.successful.to_string()
                };

                match summary {
                    Some(s) => writeln!(
                        output,
                        "| {} | {} | {:.4} | {} | {:.4} | {:.4} |",
                        tool,
                        runs_cell,
                        s.mean,
                        Self::format_std(s.std),
                        s.min,
                        s.max
                    )
                    .unwrap(),
                    None => {
                        writeln!(output, "| {} | {} | - | - | - | - |", tool, runs_cell).unwrap()
                    }
                }
            }
        }

        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn generate(
        &self,
        records: &[RunRecord],
        summaries: &[SummaryRecord],
        output_path: &Path,
    ) -> Result<()> {
        std::fs::write(output_path, Self::render(records, summaries))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{SummaryAggregator, SummaryAggregatorTrait};

    #[test]
    fn test_render_marks_failed_pairs() {
        let records = vec![
            RunRecord::success("cracken", "9digits", 0, 1.0),
            RunRecord::success("cracken", "9digits", 1, 2.0),
            RunRecord::failure("crunch", "9digits", 0),
        ];
        let summaries = SummaryAggregator::new().aggregate(&records);

        let report = MarkdownReporter::render(&records, &summaries);

        assert!(report.contains("## 9digits"));
        assert!(report.contains("| cracken | 2 | 1.5000 |"));
        assert!(report.contains("| crunch | 0 (failed) | - | - | - | - |"));
    }

    #[test]
    fn test_single_run_has_dash_std() {
        let records = vec![RunRecord::success("cracken", "9digits", 0, 1.0)];
        let summaries = SummaryAggregator::new().aggregate(&records);

        let report = MarkdownReporter::render(&records, &summaries);
        assert!(report.contains("| cracken | 1 | 1.0000 | - | 1.0000 | 1.0000 |"));
    }
}
