#![doc(test(attr(deny(warnings))))]

//! Tally keeps a personal budget ledger: a budget, the items bought against
//! it, and the derived spent and remaining totals, persisted between sessions.
//!
//! Renderers drive a [`LedgerStore`] with commands and redraw from its
//! [`LedgerSnapshot`].

pub mod errors;
pub mod session;
pub mod utils;

pub use errors::{Result, TallyError};
pub use session::{open_default, open_in, open_session, Session};
pub use tally_config::{Config, ConfigManager};
pub use tally_core::{CoreError, LedgerStore, LoadReport, LoadSource, Outcome, StorageError};
pub use tally_domain::{ItemId, ItemView, LedgerSnapshot, LedgerTotals, Theme};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with_filter(&Config::default_log_filter());
}

/// Initializes global tracing with `directive` as the fallback filter.
pub fn init_with_filter(directive: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::info!("Tally tracing initialized.");
    });
}
