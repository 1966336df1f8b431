//! @ai:module:intent Statistical summaries over raw run records
//! @ai:module:layer application
//! @ai:module:public_api SummaryAggregator, SummaryAggregatorTrait
//! @ai:module:stateless true

use crate::metrics::types::{RunRecord, SummaryRecord};
use std::collections::BTreeMap;

/// @ai:intent Trait for summary aggregation
pub trait SummaryAggregatorTrait: Send + Sync {
    /// @ai:intent Summarize successful runs per (bench, tool) pair
    fn aggregate(&self, records: &[RunRecord]) -> Vec<SummaryRecord>;
}

/// @ai:intent Computes mean, sample std, max and min of elapsed time per pair
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// @ai:intent Create a new summary aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Group successful elapsed times by (bench, tool), sorted by bench then tool
    /// @ai:post pairs without a successful run are absent
    /// @ai:effects pure
    fn group_successful(records: &[RunRecord]) -> BTreeMap<(&str, &str), Vec<f64>> {
        let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();

        for record in records {
            if let Some(elapsed) = record.successful_elapsed() {
                groups
                    .entry((record.bench.as_str(), record.tool.as_str()))
                    .or_default()
                    .push(elapsed);
            }
        }

        groups
    }

    /// @ai:intent Reduce one non-empty group to a summary row
    /// @ai:pre samples is non-empty
    /// @ai:effects pure
    fn summarize(bench: &str, tool: &str, samples: &[f64]) -> SummaryRecord {
        let mean = average(samples.iter().copied());
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);

        SummaryRecord {
            bench: bench.to_string(),
            max,
            mean,
            min,
            std: sample_std_dev(samples, mean),
            tool: tool.to_string(),
        }
    }
}

impl Default for SummaryAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// @ai:intent Calculate average of an iterator of f64
/// @ai:effects pure
fn average<I: Iterator<Item = f64>>(iter: I) -> f64 {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// @ai:intent Sample standard deviation (n - 1 denominator)
/// @ai:post None when fewer than two samples
/// @ai:effects pure
fn sample_std_dev(samples: &[f64], mean: f64) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }

    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    Some(variance.sqrt())
}

impl SummaryAggregatorTrait for SummaryAggregator {
    /// @ai:intent Filter, group and reduce run records
    /// @ai:effects pure
    fn aggregate(&self, records: &[RunRecord]) -> Vec<SummaryRecord> {
        Self::group_successful(records)
            .into_iter()
            .map(|((bench, tool), samples)| Self::summarize(bench, tool, &samples))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_average() {
        let values = vec![10.0, 20.0, 30.0];
        assert!((average(values.into_iter()) - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_sample_std_dev() {
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = sample_std_dev(&samples, 5.0).unwrap();
        assert!((std - 2.138).abs() < 0.001);
    }

    #[test]
    fn test_single_sample_has_no_std() {
        assert_eq!(sample_std_dev(&[1.5], 1.5), None);
    }

    #[test]
    fn test_aggregate_groups_and_filters() {
        let records = vec![
            RunRecord::success("cracken", "9digits", 0, 1.0),
            RunRecord::success("cracken", "9digits", 1, 3.0),
            RunRecord::success("crunch", "9digits", 0, 4.0),
            RunRecord::failure("crunch", "9digits", 1),
            RunRecord::failure("maskprocessor", "9digits", 0),
        ];

        let summaries = SummaryAggregator::new().aggregate(&records);
        assert_eq!(summaries.len(), 2);

        let cracken = &summaries[0];
        assert_eq!(cracken.tool, "cracken");
        assert!((cracken.mean - 2.0).abs() < 1e-9);
        assert!((cracken.max - 3.0).abs() < 1e-9);
        assert!((cracken.min - 1.0).abs() < 1e-9);
        assert!((cracken.std.unwrap() - 2f64.sqrt()).abs() < 1e-9);

        let crunch = &summaries[1];
        assert_eq!(crunch.tool, "crunch");
        assert!((crunch.mean - 4.0).abs() < 1e-9);
        assert_eq!(crunch.std, None);
    }

    #[test]
    fn test_pair_without_successes_is_absent() {
        let records = vec![RunRecord::failure("crunch", "1-8digits", 0)];
        assert!(SummaryAggregator::new().aggregate(&records).is_empty());
    }

    #[test]
    fn test_output_sorted_by_bench_then_tool() {
        let records = vec![
            RunRecord::success("maskprocessor", "b", 0, 1.0),
            RunRecord::success("cracken", "b", 0, 1.0),
            RunRecord::success("crunch", "a", 0, 1.0),
        ];

        let keys: Vec<_> = SummaryAggregator::new()
            .aggregate(&records)
            .into_iter()
            .map(|s| (s.bench, s.tool))
            .collect();

        assert_eq!(
            keys,
            vec![
                ("a".to_string(), "crunch".to_string()),
                ("b".to_string(), "cracken".to_string()),
                ("b".to_string(), "maskprocessor".to_string()),
            ]
        );
    }
}
