//! JSON encoding of the ledger record.

use tally_domain::{LedgerState, StoredLedger};

use crate::StorageError;

/// Serializes the full ledger into the record written to the slot.
pub fn encode_state(state: &LedgerState) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parses a slot payload into its raw, possibly legacy, shape.
pub fn decode_record(payload: &str) -> Result<StoredLedger, StorageError> {
    Ok(serde_json::from_str(payload)?)
}
