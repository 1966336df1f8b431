//! @ai:module:intent Command builders for each supported generation tool
//! @ai:module:layer domain
//! @ai:module:public_api Cracken, Maskprocessor, Crunch, translate_mask, CRUNCH_TOKENS
//! @ai:module:stateless true

use crate::tools::command::{CommandBuilder, Invocation};
use crate::workload::Workload;
use std::path::{Path, PathBuf};

/// Mask tokens rewritten for crunch's `-t` pattern syntax, applied in order.
/// No replacement contains '?', so no replacement can match a later token.
/// crunch has no charset for `?a` or `?b`; those pass through untranslated and
/// crunch rejects them, which the runner records as a failed run.
pub const CRUNCH_TOKENS: &[(&str, &str)] = &[("?d", "%"), ("?u", ","), ("?l", "@"), ("?s", "^")];

/// @ai:intent Rewrite every token of a mask with sequential whole-string replaces
/// @ai:effects pure
pub fn translate_mask(mask: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(mask.to_string(), |acc, (token, replacement)| {
            acc.replace(token, replacement)
        })
}

/// @ai:intent cracken: native flags, mask passed through
#[derive(Debug, Clone)]
pub struct Cracken {
    program: PathBuf,
}

impl Cracken {
    pub const EXECUTABLE: &'static str = "cracken";

    /// @ai:intent Builder for the cracken binary inside a tools directory
    /// @ai:effects pure
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            program: dir.join(Self::EXECUTABLE),
        }
    }
}

impl CommandBuilder for Cracken {
    fn build(&self, workload: &Workload) -> Invocation {
        Invocation::new(&self.program)
            .arg("-m")
            .arg(workload.min_length)
            .arg("-x")
            .arg(workload.max_length)
            .arg(&workload.mask)
    }
}

/// @ai:intent maskprocessor: increment range flag, mask passed through
#[derive(Debug, Clone)]
pub struct Maskprocessor {
    program: PathBuf,
}

impl Maskprocessor {
    pub const EXECUTABLE: &'static str = "mp64.bin";

    /// @ai:intent Builder for the mp64.bin binary inside a tools directory
    /// @ai:effects pure
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            program: dir.join(Self::EXECUTABLE),
        }
    }
}

impl CommandBuilder for Maskprocessor {
    fn build(&self, workload: &Workload) -> Invocation {
        Invocation::new(&self.program)
            .arg("-i")
            .arg(format!("{}:{}", workload.min_length, workload.max_length))
            .arg(&workload.mask)
    }
}

/// @ai:intent crunch: positional length bounds, mask translated to crunch symbols
#[derive(Debug, Clone)]
pub struct Crunch {
    program: PathBuf,
}

impl Crunch {
    pub const EXECUTABLE: &'static str = "crunch";

    /// @ai:intent Builder for the crunch binary inside a tools directory
    /// @ai:effects pure
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            program: dir.join(Self::EXECUTABLE),
        }
    }
}

impl CommandBuilder for Crunch {
    fn build(&self, workload: &Workload) -> Invocation {
        Invocation::new(&self.program)
            .arg(workload.min_length)
            .arg(workload.max_length)
            .arg("-t")
            .arg(translate_mask(&workload.mask, CRUNCH_TOKENS))
    }
}
