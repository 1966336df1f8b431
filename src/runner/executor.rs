//! @ai:module:intent Time-budgeted measurement loop over the workload x tool matrix
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkRunner, PairOutcome
//! @ai:module:stateless false

use crate::config::RunConfig;
use crate::error::Result;
use crate::metrics::RunRecord;
use crate::runner::launcher::ProcessLauncher;
use crate::tools::Tool;
use crate::workload::Workload;
use std::io::Write;
use std::time::{Duration, Instant};

/// @ai:intent Terminal state of one (workload, tool) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Cumulative successful time reached the budget
    BudgetExhausted { iterations: u32, elapsed: Duration },
    /// The run at `iteration` exited non-zero or could not be started
    Failed { iteration: u32 },
}

/// @ai:intent Runs every pair sequentially until its budget is spent or a run fails
pub struct BenchmarkRunner<L: ProcessLauncher> {
    launcher: L,
    run_config: RunConfig,
}

impl<L: ProcessLauncher> BenchmarkRunner<L> {
    /// @ai:intent Create a new benchmark runner
    /// @ai:effects pure
    pub fn new(launcher: L, run_config: RunConfig) -> Self {
        Self {
            launcher,
            run_config,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// @ai:intent Emit one progress marker
    /// @ai:effects io
    fn tick(&self) {
        if self.run_config.progress {
            eprint!(".");
            let _ = std::io::stderr().flush();
        }
    }

    fn end_progress_line(&self) {
        if self.run_config.progress {
            eprintln!();
        }
    }

    /// @ai:intent Measure one pair, appending its records
    /// @ai:pre workload.validate() is Ok
    /// @ai:post appended iterations are 0..k with at most one trailing failure
    /// @ai:effects process, io
    pub fn run_pair(
        &self,
        workload: &Workload,
        tool: &Tool,
        records: &mut Vec<RunRecord>,
    ) -> PairOutcome {
        let budget = self.run_config.time_budget();
        let invocation = tool.build_command(workload);

        tracing::info!(
            "running {:?} ({} / {})",
            invocation.to_string(),
            workload.name,
            tool.name
        );

        let mut cumulative = Duration::ZERO;
        let mut iteration = 0u32;

        while cumulative < budget {
            self.tick();

            let start = Instant::now();
            let launched = self.launcher.launch(&invocation);
            let elapsed = start.elapsed();

            let failure = match launched {
                Ok(status) if status.success => None,
                Ok(status) => Some(format!("exit code {:?}", status.code)),
                Err(e) => Some(e.to_string()),
            };

            if let Some(reason) = failure {
                self.end_progress_line();
                tracing::warn!(
                    "cmd failed: {} / {} iteration {} ({})",
                    workload.name,
                    tool.name,
                    iteration,
                    reason
                );
                records.push(RunRecord::failure(&tool.name, &workload.name, iteration));
                return PairOutcome::Failed { iteration };
            }

            tracing::debug!(
                "{} / {} iteration {} took {:.3}s",
                workload.name,
                tool.name,
                iteration,
                elapsed.as_secs_f64()
            );

            records.push(RunRecord::success(
                &tool.name,
                &workload.name,
                iteration,
                elapsed.as_secs_f64(),
            ));
            cumulative += elapsed;
            iteration += 1;
        }

        self.end_progress_line();
        tracing::info!(
            "{} / {}: {} iterations in {:.3}s",
            workload.name,
            tool.name,
            iteration,
            cumulative.as_secs_f64()
        );

        PairOutcome::BudgetExhausted {
            iterations: iteration,
            elapsed: cumulative,
        }
    }

    /// @ai:intent Run every (workload, tool) pair, workload-major
    /// @ai:post Err (before anything runs) if any workload is invalid
    /// @ai:effects process, io
    pub fn run_all(&self, workloads: &[Workload], tools: &[Tool]) -> Result<Vec<RunRecord>> {
        for workload in workloads {
            workload.validate()?;
        }

        let mut records = Vec::new();
        let total = workloads.len() * tools.len();
        let mut current = 0;

        for workload in workloads {
            for tool in tools {
                current += 1;
                tracing::info!("[{}/{}] {} x {}", current, total, workload.name, tool.name);
                self.run_pair(workload, tool, &mut records);
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::runner::launcher::MockLauncher;
    use crate::tools::Invocation;

    fn quiet_config(budget: Duration) -> RunConfig {
        RunConfig {
            time_budget_secs: budget.as_secs_f64(),
            progress: false,
        }
    }

    fn fake_tool(name: &str) -> Tool {
        Tool::new(name, |w: &Workload| Invocation::new("fake").arg(&w.mask))
    }

    fn workload() -> Workload {
        Workload::new("digits", "?d?d", 1, 2)
    }

    #[test]
    fn test_budget_exhaustion_yields_consecutive_iterations() {
        let delay = Duration::from_millis(2);
        let budget = Duration::from_millis(20);
        let runner = BenchmarkRunner::new(MockLauncher::succeeding(delay), quiet_config(budget));

        let mut records = Vec::new();
        let outcome = runner.run_pair(&workload(), &fake_tool("fake"), &mut records);

        let iterations = match outcome {
            PairOutcome::BudgetExhausted { iterations, .. } => iterations,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert!(iterations >= 1);
        assert_eq!(records.len(), iterations as usize);

        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.iteration, i as u32);
            assert!(record.ok);
            assert!(record.elapsed_seconds.is_some());
        }

        let total: f64 = records.iter().filter_map(|r| r.elapsed_seconds).sum();
        let last = records.last().and_then(|r| r.elapsed_seconds).unwrap();
        assert!(total + 1e-9 >= budget.as_secs_f64());
        assert!(total - last < budget.as_secs_f64() + 1e-9);
    }

    #[test]
    fn test_failure_stops_pair_with_one_trailing_record() {
        let runner = BenchmarkRunner::new(
            MockLauncher::failing_at(3, Duration::ZERO),
            quiet_config(Duration::from_secs(3600)),
        );

        let mut records = Vec::new();
        let outcome = runner.run_pair(&workload(), &fake_tool("fake"), &mut records);

        assert_eq!(outcome, PairOutcome::Failed { iteration: 3 });
        assert_eq!(records.len(), 4);
        assert!(records[..3].iter().all(|r| r.ok));

        let last = &records[3];
        assert_eq!(last.iteration, 3);
        assert!(!last.ok);
        assert_eq!(last.elapsed_seconds, None);
    }

    #[test]
    fn test_zero_budget_runs_nothing() {
        let runner = BenchmarkRunner::new(
            MockLauncher::succeeding(Duration::ZERO),
            quiet_config(Duration::ZERO),
        );

        let mut records = Vec::new();
        let outcome = runner.run_pair(&workload(), &fake_tool("fake"), &mut records);

        assert!(records.is_empty());
        assert_eq!(runner.launcher().launches(), 0);
        assert!(matches!(
            outcome,
            PairOutcome::BudgetExhausted { iterations: 0, .. }
        ));
    }

    #[test]
    fn test_failing_tool_does_not_abort_run() {
        let runner = BenchmarkRunner::new(
            MockLauncher::failing(),
            quiet_config(Duration::from_secs(1)),
        );
        let workloads = vec![workload(), Workload::new("upper", "?u", 1, 1)];
        let tools = vec![fake_tool("a"), fake_tool("b")];

        let records = runner.run_all(&workloads, &tools).unwrap();

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| !r.ok && r.iteration == 0));
        assert_eq!(records[0].bench, "digits");
        assert_eq!(records[0].tool, "a");
        assert_eq!(records[1].tool, "b");
        assert_eq!(records[2].bench, "upper");
    }

    #[test]
    fn test_all_class_workload_runs() {
        let runner = BenchmarkRunner::new(
            MockLauncher::succeeding(Duration::from_micros(200)),
            quiet_config(Duration::from_millis(1)),
        );
        let workloads = vec![Workload::new("all", "?a?a?a", 3, 3)];

        let records = runner.run_all(&workloads, &[fake_tool("a")]).unwrap();

        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.ok && r.bench == "all"));
        assert!(runner.launcher().launches() >= 1);
    }

    #[test]
    fn test_invalid_workload_aborts_before_running() {
        let runner = BenchmarkRunner::new(
            MockLauncher::succeeding(Duration::ZERO),
            quiet_config(Duration::from_millis(1)),
        );
        let workloads = vec![workload(), Workload::new("broken", "?d", 2, 1)];

        let result = runner.run_all(&workloads, &[fake_tool("a")]);

        assert!(matches!(result, Err(Error::InvalidWorkload { .. })));
        assert_eq!(runner.launcher().launches(), 0);
    }
}
