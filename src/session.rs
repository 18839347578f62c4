//! Wires configuration, the JSON file slot and the ledger store together.

use std::path::PathBuf;

use tally_config::{Config, ConfigManager, LoadedConfig};
use tally_core::{LedgerStore, LoadReport, PersistenceAdapter};
use tally_storage_json::JsonFileSlot;
use tracing::warn;

use crate::errors::Result;

/// An opened ledger together with the configuration it was opened with.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub store: LedgerStore,
    pub load_report: LoadReport,
}

/// Opens the ledger stored under `config`'s data directory.
pub fn open_session(config: Config) -> Result<Session> {
    let slot = JsonFileSlot::new(config.resolve_data_dir())?;
    let (store, load_report) = LedgerStore::open(
        PersistenceAdapter::new(Box::new(slot)),
        &config.ledger_defaults(),
    );
    for warning in &load_report.warnings {
        warn!("{}", warning);
    }
    Ok(Session {
        config,
        store,
        load_report,
    })
}

/// Opens the ledger under the platform data directory, or `TALLY_HOME`.
pub fn open_default() -> Result<Session> {
    let base = Config::default().with_env_overrides().resolve_data_dir();
    open_in(base)
}

/// Loads `config.json` from `base` (honouring environment overrides),
/// initializes tracing, and opens the ledger stored alongside it.
///
/// An unreadable config does not stop the session: the defaults are used and
/// the problem is logged.
pub fn open_in(base: PathBuf) -> Result<Session> {
    let manager = ConfigManager::with_base_dir(base.clone())?;
    let LoadedConfig { config, ignored } = manager.load_or_default();
    let mut config = config.with_env_overrides();
    if config.data_dir.is_none() {
        config.data_dir = Some(base);
    }

    crate::init_with_filter(&config.log_filter);
    if let Some(err) = ignored {
        warn!(
            path = %manager.config_path().display(),
            error = %err,
            "ignoring configuration; using defaults"
        );
    }
    open_session(config)
}
