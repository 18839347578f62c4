use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{} is not a valid configuration: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serde(String),
}

impl ConfigError {
    /// True when the file exists but could not be understood.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConfigError::Malformed { .. })
    }
}
