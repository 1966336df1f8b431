//! @ai:module:intent Configuration structs for the benchmark harness
//! @ai:module:layer infrastructure
//! @ai:module:public_api BenchmarkConfig, RunConfig, ToolsConfig, PathConfig, FilterConfig
//! @ai:module:stateless true

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// @ai:intent Main configuration for the benchmark harness
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// @ai:intent Run configuration for the measurement loop
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Cumulative successful run time allotted to each (workload, tool) pair
    #[serde(default = "default_time_budget_secs")]
    pub time_budget_secs: f64,
    #[serde(default = "default_true")]
    pub progress: bool,
}

/// @ai:intent Location of the benchmarked executables
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_tools_dir")]
    pub dir: PathBuf,
}

/// @ai:intent Output artifact locations
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    #[serde(default = "default_detailed_file")]
    pub detailed_file: String,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
    #[serde(default = "default_markdown_file")]
    pub markdown_file: String,
    /// Write artifacts into a UTC-timestamped subdirectory of results_dir
    #[serde(default)]
    pub timestamped: bool,
}

/// @ai:intent Filter configuration for selecting workloads and tools
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub benches: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: default_time_budget_secs(),
            progress: true,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            dir: default_tools_dir(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            detailed_file: default_detailed_file(),
            summary_file: default_summary_file(),
            markdown_file: default_markdown_file(),
            timestamped: false,
        }
    }
}

fn default_time_budget_secs() -> f64 {
    120.0
}

fn default_true() -> bool {
    true
}

fn default_tools_dir() -> PathBuf {
    PathBuf::from("tools")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_detailed_file() -> String {
    "bench_results_detailed.json".to_string()
}

fn default_summary_file() -> String {
    "bench_results.json".to_string()
}

fn default_markdown_file() -> String {
    "bench_results.md".to_string()
}

impl BenchmarkConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl RunConfig {
    /// @ai:intent Time budget as a Duration
    /// @ai:post +inf or overflowing budgets saturate to Duration::MAX; negative or NaN give zero
    /// @ai:effects io
    pub fn time_budget(&self) -> Duration {
        match Duration::try_from_secs_f64(self.time_budget_secs) {
            Ok(budget) => budget,
            Err(_) if self.time_budget_secs > 0.0 => Duration::MAX,
            Err(_) => {
                tracing::warn!(
                    "time budget {} is not a non-negative number, nothing will run",
                    self.time_budget_secs
                );
                Duration::ZERO
            }
        }
    }
}

impl FilterConfig {
    /// @ai:intent Check if filter selects a workload name
    /// @ai:effects pure
    pub fn matches_bench(&self, bench: &str) -> bool {
        self.benches
            .as_ref()
            .map(|b| b.iter().any(|name| name == bench))
            .unwrap_or(true)
    }

    /// @ai:intent Check if filter selects a tool name
    /// @ai:effects pure
    pub fn matches_tool(&self, tool: &str) -> bool {
        self.tools
            .as_ref()
            .map(|t| t.iter().any(|name| name == tool))
            .unwrap_or(true)
    }

    /// @ai:intent Check if filter selects a (bench, tool) pair
    /// @ai:effects pure
    pub fn matches(&self, bench: &str, tool: &str) -> bool {
        self.matches_bench(bench) && self.matches_tool(tool)
    }
}
