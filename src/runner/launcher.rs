//! @ai:module:intent Synchronous process launching for benchmarked tools
//! @ai:module:layer infrastructure
//! @ai:module:public_api ProcessLauncher, SystemLauncher, MockLauncher, LaunchStatus
//! @ai:module:stateless false

use crate::error::{Error, Result};
use crate::tools::Invocation;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// @ai:intent Exit information of a finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    pub success: bool,
    pub code: Option<i32>,
}

/// @ai:intent Trait for running an invocation to completion
pub trait ProcessLauncher: Send + Sync {
    /// @ai:intent Run the invocation and block until it exits
    /// @ai:post Err only when the process could not be started
    fn launch(&self, invocation: &Invocation) -> Result<LaunchStatus>;
}

/// @ai:intent Spawns real processes with stdout discarded
pub struct SystemLauncher;

impl SystemLauncher {
    /// @ai:intent Create a new system launcher
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for SystemLauncher {
    /// @ai:intent Spawn without a shell, discard stdout, wait for exit
    /// @ai:effects process
    fn launch(&self, invocation: &Invocation) -> Result<LaunchStatus> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        Ok(LaunchStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// @ai:intent Launcher for tests: sleeps instead of spawning
pub struct MockLauncher {
    delay: Duration,
    fail_at: Option<u32>,
    launches: AtomicU32,
}

impl MockLauncher {
    /// @ai:intent Every launch succeeds after `delay`
    /// @ai:effects pure
    pub fn succeeding(delay: Duration) -> Self {
        Self {
            delay,
            fail_at: None,
            launches: AtomicU32::new(0),
        }
    }

    /// @ai:intent Every launch fails immediately
    /// @ai:effects pure
    pub fn failing() -> Self {
        Self::failing_at(0, Duration::ZERO)
    }

    /// @ai:intent Launches from number `n` on (zero-based, counted across all pairs) fail
    /// @ai:effects pure
    pub fn failing_at(n: u32, delay: Duration) -> Self {
        Self {
            delay,
            fail_at: Some(n),
            launches: AtomicU32::new(0),
        }
    }

    /// @ai:intent Number of launches so far
    /// @ai:effects pure
    pub fn launches(&self) -> u32 {
        self.launches.load(Ordering::SeqCst)
    }
}

impl ProcessLauncher for MockLauncher {
    /// @ai:intent Sleep for the configured delay and report the scripted status
    /// @ai:effects time
    fn launch(&self, _invocation: &Invocation) -> Result<LaunchStatus> {
        let n = self.launches.fetch_add(1, Ordering::SeqCst);

        let success = match self.fail_at {
            Some(fail_at) => n < fail_at,
            None => true,
        };

        if success {
            std::thread::sleep(self.delay);
        }

        Ok(LaunchStatus {
            success,
            code: Some(if success { 0 } else { 1 }),
        })
    }
}
