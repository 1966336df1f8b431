//! @ai:module:intent Process launching and the measurement loop
//! @ai:module:layer infrastructure
//! @ai:module:public_api BenchmarkRunner, PairOutcome, ProcessLauncher, SystemLauncher, MockLauncher

pub mod executor;
pub mod launcher;

pub use executor::{BenchmarkRunner, PairOutcome};
pub use launcher::{LaunchStatus, MockLauncher, ProcessLauncher, SystemLauncher};
