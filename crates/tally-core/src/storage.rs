use std::sync::Mutex;

use crate::StorageError;

/// Fixed identifier of the slot holding the serialized ledger.
pub const SLOT_KEY: &str = "budgetTrackerData_v1";

/// A single durable key-value location holding the whole serialized ledger.
///
/// Writes replace the previous payload in full; a reader must never observe a
/// partially written record.
pub trait StateSlot: Send + Sync {
    fn key(&self) -> &str;
    /// Returns `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}

/// Process-local slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.payload.lock().ok().and_then(|guard| guard.clone())
    }
}

impl StateSlot for MemorySlot {
    fn key(&self) -> &str {
        SLOT_KEY
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .payload
            .lock()
            .map_err(|_| StorageError::Unavailable("memory slot lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|_| StorageError::Unavailable("memory slot lock poisoned".into()))?;
        *guard = Some(payload.to_string());
        Ok(())
    }
}

impl<S: StateSlot + ?Sized> StateSlot for std::sync::Arc<S> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        (**self).write(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_starts_empty() {
        let slot = MemorySlot::new();
        assert!(slot.read().expect("read slot").is_none());
        assert_eq!(slot.key(), SLOT_KEY);
    }

    #[test]
    fn memory_slot_last_write_wins() {
        let slot = MemorySlot::new();
        slot.write("first").expect("write");
        slot.write("second").expect("write");
        assert_eq!(slot.read().expect("read").as_deref(), Some("second"));
    }
}
