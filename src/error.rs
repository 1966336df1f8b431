//! @ai:module:intent Error types for the benchmark harness
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for harness operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid workload '{name}': {reason}")]
    InvalidWorkload { name: String, reason: String },

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
