//! tally-core
//!
//! Ledger state machine and persistence adapter for Tally.
//! Depends on tally-domain. No terminal I/O; durable storage is reached only
//! through the [`storage::StateSlot`] trait.

pub mod codec;
pub mod error;
pub mod migration;
pub mod outcome;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::{CoreError, StorageError};
pub use migration::{migrate, Migrated, MigrationReport};
pub use outcome::{ItemCommit, Outcome};
pub use persistence::{LoadReport, LoadSource, PersistenceAdapter};
pub use storage::{MemorySlot, StateSlot, SLOT_KEY};
pub use store::LedgerStore;
