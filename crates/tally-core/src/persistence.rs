use std::fmt;

use tally_domain::{LedgerDefaults, LedgerState, StoredLedger};
use tracing::{debug, warn};

use crate::{
    codec::{decode_record, encode_state},
    migration::{self, Migrated},
    storage::{MemorySlot, StateSlot},
    StorageError,
};

/// Where the state of a freshly opened ledger came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Nothing had been stored yet.
    Empty,
    /// A stored record was read and migrated.
    Restored,
    /// The stored record could not be read or parsed and was ignored.
    Discarded,
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadSource::Empty => "empty",
            LoadSource::Restored => "restored",
            LoadSource::Discarded => "discarded",
        };
        f.write_str(label)
    }
}

/// Metadata describing the outcome of a load operation.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub source: LoadSource,
    pub migrations: Vec<String>,
    pub warnings: Vec<String>,
}

impl LoadReport {
    fn new(source: LoadSource) -> Self {
        Self {
            source,
            migrations: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Moves the ledger between memory and its durable slot.
pub struct PersistenceAdapter {
    slot: Box<dyn StateSlot>,
}

impl PersistenceAdapter {
    pub fn new(slot: Box<dyn StateSlot>) -> Self {
        Self { slot }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemorySlot::new()))
    }

    /// Reads and parses the stored record, surfacing every failure.
    pub fn read_record(&self) -> Result<Option<StoredLedger>, StorageError> {
        match self.slot.read()? {
            Some(payload) => decode_record(&payload).map(Some),
            None => Ok(None),
        }
    }

    /// Reads the stored record. Unreadable or unparsable content is treated the
    /// same as an empty slot.
    pub fn load(&self) -> Option<StoredLedger> {
        match self.read_record() {
            Ok(record) => record,
            Err(err) => {
                warn!(slot = self.slot.key(), error = %err, "load failed; ignoring stored ledger");
                None
            }
        }
    }

    pub fn migrate(&self, stored: StoredLedger, defaults: &LedgerDefaults) -> Migrated {
        migration::migrate(stored, defaults)
    }

    /// Overwrites the slot with the full serialized state.
    pub fn save(&self, state: &LedgerState) -> Result<(), StorageError> {
        let payload = encode_state(state)?;
        self.slot.write(&payload)?;
        debug!(slot = self.slot.key(), items = state.items.len(), "ledger saved");
        Ok(())
    }

    /// Loads, migrates, and falls back to a default ledger when nothing usable
    /// is stored. A migrated record is written back so the repair happens once.
    pub fn restore(&self, defaults: &LedgerDefaults) -> (LedgerState, LoadReport) {
        let stored = match self.read_record() {
            Ok(Some(stored)) => stored,
            Ok(None) => return (LedgerState::new(defaults), LoadReport::new(LoadSource::Empty)),
            Err(err) => {
                warn!(slot = self.slot.key(), error = %err, "load failed; starting from defaults");
                let mut report = LoadReport::new(LoadSource::Discarded);
                report.warnings.push(err.to_string());
                return (LedgerState::new(defaults), report);
            }
        };

        let Migrated {
            state,
            report: migration,
        } = self.migrate(stored, defaults);
        let mut report = LoadReport::new(LoadSource::Restored);
        if !migration.is_empty() {
            for change in &migration.changes {
                warn!(slot = self.slot.key(), "migrated: {}", change);
            }
            if let Err(err) = self.save(&state) {
                warn!(slot = self.slot.key(), error = %err, "failed to persist migrated ledger");
                report.warnings.push(err.to_string());
            }
        }
        report.migrations = migration.changes;
        (state, report)
    }
}

impl fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("slot", &self.slot.key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tally_domain::{CurrencyCode, Item, ItemId, Theme};

    use super::*;

    fn adapter_over(slot: &Arc<MemorySlot>) -> PersistenceAdapter {
        PersistenceAdapter::new(Box::new(Arc::clone(slot)))
    }

    #[test]
    fn load_of_empty_slot_is_none() {
        assert!(PersistenceAdapter::in_memory().load().is_none());
    }

    #[test]
    fn load_of_garbage_is_none() {
        let slot = Arc::new(MemorySlot::with_payload("][ definitely not json"));
        assert!(adapter_over(&slot).load().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let slot = Arc::new(MemorySlot::new());
        let adapter = adapter_over(&slot);
        let mut state = LedgerState::fresh(CurrencyCode::new("GBP"), Theme::Dark);
        state.budget = 80.0;
        let id = state.allocate_id().expect("ids available");
        state.items.push(Item::new(id, "Train", 2.0, 12.25));

        adapter.save(&state).expect("save state");
        let stored = adapter.load().expect("stored record");
        let migrated = adapter.migrate(stored, &LedgerDefaults::default());
        assert_eq!(migrated.state, state);
        assert!(migrated.report.is_empty());
    }

    #[test]
    fn inexact_products_survive_reload_bit_for_bit() {
        let slot = Arc::new(MemorySlot::new());
        let adapter = adapter_over(&slot);
        let mut state = LedgerState::default();
        state.budget = 1.0715660391465826e-75;
        let id = state.allocate_id().expect("ids available");
        state.items.push(Item::new(id, "Stamp", 1.1, 0.01));
        assert_eq!(state.items[0].amount, 0.011000000000000001);

        adapter.save(&state).expect("save state");
        let stored = adapter.load().expect("stored record");
        let reloaded = adapter.migrate(stored, &LedgerDefaults::default()).state;
        assert_eq!(reloaded.budget.to_bits(), state.budget.to_bits());
        assert_eq!(reloaded.items[0].amount.to_bits(), (1.1f64 * 0.01).to_bits());
        assert_eq!(reloaded.remaining(), state.remaining());
    }

    #[test]
    fn restore_discards_unparsable_record() {
        let slot = Arc::new(MemorySlot::with_payload("{\"budget\": "));
        let defaults = LedgerDefaults::new(CurrencyCode::new("USD"), Theme::Dark);
        let (state, report) = adapter_over(&slot).restore(&defaults);
        assert_eq!(report.source, LoadSource::Discarded);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(state, LedgerState::new(&defaults));
    }

    #[test]
    fn restore_writes_back_migrated_record() {
        let slot = Arc::new(MemorySlot::with_payload(
            r#"{"budget":50,"items":[{"id":1,"name":"X","amount":30}],"nextId":2,"currency":"USD"}"#,
        ));
        let (state, report) = adapter_over(&slot).restore(&LedgerDefaults::default());
        assert_eq!(report.source, LoadSource::Restored);
        assert!(!report.migrations.is_empty());
        assert_eq!(state.items[0].unit_price, 30.0);

        let rewritten = slot.contents().expect("slot rewritten");
        assert!(rewritten.contains("\"unitPrice\": 30.0"));
        assert_eq!(state.items[0].id, ItemId(1));
    }
}
