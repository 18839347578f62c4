mod common;

use common::{reopen, setup_test_session};
use tally::{CoreError, LoadSource, Theme};

#[test]
fn coffee_budget_walkthrough() {
    let mut session = setup_test_session();
    assert_eq!(session.load_report.source, LoadSource::Empty);
    let store = &mut session.store;

    store.set_budget(100.0).expect("set budget").into_value();
    let added = store
        .add_or_update_item("Coffee", 2.0, 3.5)
        .expect("add coffee")
        .into_value();
    let coffee = added.snapshot.item(added.id).expect("coffee present");
    assert_eq!(coffee.amount, 7.0);
    assert_eq!(added.snapshot.spent, 7.0);
    assert_eq!(added.snapshot.remaining, 93.0);

    store.begin_edit(added.id).expect("begin edit").into_value();
    let edited = store
        .add_or_update_item("Coffee", 3.0, 3.5)
        .expect("save edit")
        .into_value();
    let coffee = edited.snapshot.item(added.id).expect("coffee present");
    assert_eq!(coffee.qty, 3.0);
    assert_eq!(coffee.amount, 10.5);
    assert!(edited.snapshot.editing_id.is_none());
    assert_eq!(edited.snapshot.remaining, 89.5);

    let err = store.set_budget(-5.0).expect_err("negative budget rejected");
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(store.snapshot().budget, 100.0);

    store.set_currency("EUR").expect("set currency").into_value();
    let cleared = store.clear_all().into_value();
    assert_eq!(cleared.budget, 0.0);
    assert!(cleared.items.is_empty());
    assert_eq!(cleared.currency.as_str(), "EUR");

    let next = store
        .add_or_update_item("Tea", 1.0, 2.0)
        .expect("add tea")
        .into_value();
    assert_eq!(next.id.get(), 1, "counter restarts after clear_all");
}

#[test]
fn state_persists_across_sessions() {
    let session = setup_test_session();
    let config = session.config.clone();
    let mut store = session.store;

    store.set_budget(40.0).expect("set budget").into_value();
    let kept = store
        .add_or_update_item("Bread", 2.0, 2.25)
        .expect("add bread")
        .into_value()
        .id;
    let dropped = store
        .add_or_update_item("Jam", 1.0, 3.0)
        .expect("add jam")
        .into_value()
        .id;
    store.remove_item(dropped).into_value();
    store.toggle_theme().into_value();
    let expected = store.snapshot();
    drop(store);

    let reopened = reopen(&config);
    assert_eq!(reopened.load_report.source, LoadSource::Restored);
    assert_eq!(reopened.store.snapshot(), expected);
    assert_eq!(reopened.store.snapshot().theme, Theme::Dark);

    let mut store = reopened.store;
    let fresh = store
        .add_or_update_item("Butter", 1.0, 1.5)
        .expect("add butter")
        .into_value()
        .id;
    assert!(fresh > dropped && dropped > kept);
}

#[test]
fn snapshot_flags_overspend() {
    let mut session = setup_test_session();
    let store = &mut session.store;
    store.set_budget(5.0).expect("set budget").into_value();
    store
        .add_or_update_item("Dinner", 1.0, 12.0)
        .expect("add dinner")
        .into_value();

    let totals = store.totals();
    assert!(totals.is_over_budget());
    assert_eq!(totals.remaining, -7.0);
}
