//! @ai:module:intent Record types produced by the runner and the aggregator
//! @ai:module:layer domain
//! @ai:module:public_api RunRecord, SummaryRecord
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Outcome of a single execution attempt
/// @ai:invariant elapsed_seconds.is_some() == ok
///
/// Fields are declared in alphabetical order so serialized keys are sorted.
/// `iter` and `took` are accepted when reading raw files from older runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub bench: String,
    #[serde(default, alias = "took", skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
    #[serde(alias = "iter")]
    pub iteration: u32,
    pub ok: bool,
    pub tool: String,
}

impl RunRecord {
    /// @ai:intent Record a successful run and its wall-clock time
    /// @ai:effects pure
    pub fn success(tool: &str, bench: &str, iteration: u32, elapsed_seconds: f64) -> Self {
        Self {
            bench: bench.to_string(),
            elapsed_seconds: Some(elapsed_seconds),
            iteration,
            ok: true,
            tool: tool.to_string(),
        }
    }

    /// @ai:intent Record a failed run; failed runs carry no timing
    /// @ai:effects pure
    pub fn failure(tool: &str, bench: &str, iteration: u32) -> Self {
        Self {
            bench: bench.to_string(),
            elapsed_seconds: None,
            iteration,
            ok: false,
            tool: tool.to_string(),
        }
    }

    /// @ai:intent Elapsed time if this run succeeded
    /// @ai:effects pure
    pub fn successful_elapsed(&self) -> Option<f64> {
        if self.ok {
            self.elapsed_seconds
        } else {
            None
        }
    }
}

/// @ai:intent Elapsed-time statistics for one (bench, tool) pair
///
/// `std` is the sample standard deviation; it is `None` (and omitted from
/// JSON) when the pair has a single successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub bench: String,
    pub max: f64,
    pub mean: f64,
    pub min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    pub tool: String,
}
