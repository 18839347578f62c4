use std::fs;

use tally::{open_in, ConfigManager, LoadSource};
use tempfile::TempDir;

#[test]
fn malformed_config_opens_with_defaults() {
    let home = TempDir::new().expect("tempdir");
    fs::write(home.path().join("config.json"), "{ currency: ").expect("write config");

    let mut session = open_in(home.path().to_path_buf()).expect("open session");
    assert_eq!(session.config.currency, "USD");
    assert_eq!(session.config.data_dir.as_deref(), Some(home.path()));
    assert_eq!(session.load_report.source, LoadSource::Empty);

    session.store.set_budget(12.0).expect("set budget").into_value();
    assert!(home.path().join("budgettrackerdata_v1.json").exists());
    assert_eq!(
        fs::read_to_string(home.path().join("config.json")).expect("read config"),
        "{ currency: "
    );
}

#[test]
fn stored_config_shapes_a_fresh_ledger() {
    let home = TempDir::new().expect("tempdir");
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).expect("manager");
    let mut config = manager.load().expect("defaults");
    config.currency = "gbp".into();
    manager.save(&config).expect("save config");

    let session = open_in(home.path().to_path_buf()).expect("open session");
    assert_eq!(session.store.snapshot().currency.as_str(), "GBP");
}
