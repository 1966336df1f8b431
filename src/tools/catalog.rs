//! @ai:module:intent Tool definitions and the compiled-in tool catalog
//! @ai:module:layer domain
//! @ai:module:public_api Tool, default_tools
//! @ai:module:stateless true

use crate::tools::builders::{Cracken, Crunch, Maskprocessor};
use crate::tools::command::{CommandBuilder, Invocation};
use crate::workload::Workload;
use std::path::Path;

/// @ai:intent A benchmarked tool: display name plus its command builder
pub struct Tool {
    pub name: String,
    builder: Box<dyn CommandBuilder>,
}

impl Tool {
    /// @ai:intent Create a tool from any command builder
    /// @ai:effects pure
    pub fn new(name: &str, builder: impl CommandBuilder + 'static) -> Self {
        Self {
            name: name.to_string(),
            builder: Box::new(builder),
        }
    }

    /// @ai:intent Build this tool's invocation for a workload
    /// @ai:effects pure
    pub fn build_command(&self, workload: &Workload) -> Invocation {
        self.builder.build(workload)
    }
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name).finish()
    }
}

/// @ai:intent All supported tools, resolved inside tools_dir, in run order
/// @ai:effects pure
pub fn default_tools(tools_dir: &Path) -> Vec<Tool> {
    vec![
        Tool::new("cracken", Cracken::in_dir(tools_dir)),
        Tool::new("maskprocessor", Maskprocessor::in_dir(tools_dir)),
        Tool::new("crunch", Crunch::in_dir(tools_dir)),
    ]
}
