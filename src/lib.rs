//! @ai:module:intent Benchmark harness for wordlist generation tools
//! @ai:module:layer application
//! @ai:module:public_api config, error, workload, tools, runner, metrics, report, toolchain

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod toolchain;
pub mod tools;
pub mod workload;

pub use config::BenchmarkConfig;
pub use error::{Error, Result};
pub use metrics::{RunRecord, SummaryAggregator, SummaryAggregatorTrait, SummaryRecord};
pub use report::{ReportGenerator, ReportPaths};
pub use runner::{BenchmarkRunner, PairOutcome, ProcessLauncher, SystemLauncher};
pub use toolchain::{ToolchainStatus, ToolchainValidator};
pub use tools::{default_tools, CommandBuilder, Invocation, Tool};
pub use workload::{builtin_workloads, Workload};
