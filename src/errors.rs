use std::result::Result as StdResult;

use tally_config::ConfigError;
use tally_core::{CoreError, StorageError};
use thiserror::Error;

/// Unified error type for the core, storage and configuration layers.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, TallyError>;

impl From<StorageError> for TallyError {
    fn from(err: StorageError) -> Self {
        TallyError::Core(CoreError::Storage(err))
    }
}

impl TallyError {
    /// True for failures the user should be told about but that do not stop the session.
    pub fn is_warning(&self) -> bool {
        matches!(self, TallyError::Core(err) if err.is_warning())
    }
}
