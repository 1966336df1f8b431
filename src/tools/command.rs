//! @ai:module:intent Structured process invocations and the builder seam
//! @ai:module:layer domain
//! @ai:module:public_api Invocation, CommandBuilder
//! @ai:module:stateless true

use crate::workload::Workload;
use std::path::PathBuf;

/// @ai:intent Executable plus argument vector, spawned without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    /// @ai:intent Create an invocation with no arguments
    /// @ai:effects pure
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// @ai:intent Append one argument
    /// @ai:effects pure
    pub fn arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;

        for arg in &self.args {
            write!(f, " {}", arg)?;
        }

        Ok(())
    }
}

/// @ai:intent Maps a workload to a tool-specific invocation
/// @ai:pre workload.validate() is Ok
/// @ai:effects pure
pub trait CommandBuilder: Send + Sync {
    /// @ai:intent Build the invocation for a workload; never fails, never executes
    fn build(&self, workload: &Workload) -> Invocation;
}

impl<F> CommandBuilder for F
where
    F: Fn(&Workload) -> Invocation + Send + Sync,
{
    fn build(&self, workload: &Workload) -> Invocation {
        self(workload)
    }
}
