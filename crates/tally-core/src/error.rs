use std::io;

use tally_domain::ItemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Storage failures leave the in-memory ledger intact and are reported as warnings.
    pub fn is_warning(&self) -> bool {
        matches!(self, CoreError::Storage(_))
    }
}

/// Failures raised while reading or writing the durable slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err.to_string())
    }
}
