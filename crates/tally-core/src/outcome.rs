use tally_domain::{ItemId, LedgerSnapshot};

use crate::{CoreError, StorageError};

/// Result of a command that was applied in memory.
///
/// `storage_warning` is set when the follow-up save failed: the change is live
/// for this session but will not survive a reload.
#[derive(Debug)]
#[must_use]
pub struct Outcome<T> {
    pub value: T,
    pub storage_warning: Option<StorageError>,
}

impl<T> Outcome<T> {
    pub fn persisted(value: T) -> Self {
        Self {
            value,
            storage_warning: None,
        }
    }

    pub fn unpersisted(value: T, warning: StorageError) -> Self {
        Self {
            value,
            storage_warning: Some(warning),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.storage_warning.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Treats a failed save as an error.
    pub fn into_result(self) -> Result<T, CoreError> {
        match self.storage_warning {
            Some(err) => Err(CoreError::Storage(err)),
            None => Ok(self.value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            storage_warning: self.storage_warning,
        }
    }
}

/// Value returned by `add_or_update_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCommit {
    pub id: ItemId,
    /// False when an in-progress edit was saved instead of a new item added.
    pub created: bool,
    pub snapshot: LedgerSnapshot,
}
