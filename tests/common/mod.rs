use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use tally::{open_session, Config, Session};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config pointing at a unique, isolated data directory.
pub fn isolated_config() -> Config {
    let temp = TempDir::new().expect("create temp dir");
    let data_dir: PathBuf = temp.path().join("ledger");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    Config {
        data_dir: Some(data_dir),
        ..Config::default()
    }
}

/// Opens a session on a fresh isolated directory.
pub fn setup_test_session() -> Session {
    open_session(isolated_config()).expect("open session")
}

/// Re-opens the ledger stored for `config`, as a new process would.
pub fn reopen(config: &Config) -> Session {
    open_session(config.clone()).expect("reopen session")
}
