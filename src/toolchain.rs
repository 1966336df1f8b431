//! @ai:module:intent Check that benchmarked executables are installed
//! @ai:module:layer infrastructure
//! @ai:module:public_api ToolchainValidator, ToolchainStatus, MissingTool
//! @ai:module:stateless true

use crate::tools::Tool;
use crate::workload::Workload;
use std::path::{Path, PathBuf};

/// @ai:intent Status of toolchain validation
#[derive(Debug)]
pub struct ToolchainStatus {
    pub available: Vec<String>,
    pub missing_tools: Vec<MissingTool>,
}

/// @ai:intent Information about a missing tool
#[derive(Debug)]
pub struct MissingTool {
    pub tool_name: String,
    pub program: PathBuf,
    pub install_hint: &'static str,
}

/// @ai:intent Validates that each tool's executable exists
pub struct ToolchainValidator;

impl ToolchainValidator {
    /// @ai:intent Get install hint for a tool
    /// @ai:effects pure
    fn get_install_hint(tool: &str) -> &'static str {
        match tool {
            "cracken" => "Build cracken: https://github.com/shmuelamar/cracken",
            "maskprocessor" => "Get mp64.bin: https://github.com/hashcat/maskprocessor",
            "crunch" => "Get crunch: https://sourceforge.net/projects/crunch-wordlist/",
            _ => "Place the executable in the configured tools directory",
        }
    }

    /// @ai:intent Check if a program path names an existing file
    /// @ai:effects fs:read
    fn is_program_available(program: &Path) -> bool {
        program.is_file()
    }

    /// @ai:intent Resolve each tool's program through a probe workload and check it
    /// @ai:effects fs:read
    pub fn validate(tools: &[Tool], probe: &Workload) -> ToolchainStatus {
        let mut available = Vec::new();
        let mut missing_tools = Vec::new();

        for tool in tools {
            let program = tool.build_command(probe).program;

            if Self::is_program_available(&program) {
                available.push(tool.name.clone());
            } else {
                missing_tools.push(MissingTool {
                    tool_name: tool.name.clone(),
                    install_hint: Self::get_install_hint(&tool.name),
                    program,
                });
            }
        }

        ToolchainStatus {
            available,
            missing_tools,
        }
    }

    /// @ai:intent Log warnings for missing tools
    /// @ai:effects io
    pub fn log_warnings(status: &ToolchainStatus) {
        for missing in &status.missing_tools {
            tracing::warn!(
                "Tool '{}' not found at {} - its runs will be recorded as failures. {}",
                missing.tool_name,
                missing.program.display(),
                missing.install_hint
            );
        }
    }
}
