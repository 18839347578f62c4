//! Brings stored records, including legacy ones, into the current shape.
//!
//! Fields present in the record always win; defaults only fill gaps. Derived
//! calculations downstream assume the migrated shape.

use std::collections::HashSet;

use tally_domain::{
    CurrencyCode, Item, ItemId, LedgerDefaults, LedgerState, StoredItem, StoredLedger, Theme,
};

/// Human-readable list of the repairs applied during a migration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub changes: Vec<String>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    fn record(&mut self, change: impl Into<String>) {
        self.changes.push(change.into());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Migrated {
    pub state: LedgerState,
    pub report: MigrationReport,
}

pub fn migrate(stored: StoredLedger, defaults: &LedgerDefaults) -> Migrated {
    let mut report = MigrationReport::default();

    let budget = match stored.budget {
        Some(value) if value.is_finite() => value,
        Some(_) => {
            report.record("budget was not a number; reset to 0");
            0.0
        }
        None => {
            report.record("budget missing; defaulted to 0");
            0.0
        }
    };

    let currency = match stored.currency.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => CurrencyCode::new(code),
        _ => {
            report.record(format!(
                "currency missing; defaulted to {}",
                defaults.currency
            ));
            defaults.currency.clone()
        }
    };

    let theme = match stored.theme.as_deref() {
        Some(raw) => Theme::parse(raw).unwrap_or_else(|| {
            report.record(format!(
                "unknown theme `{}`; using preferred {}",
                raw, defaults.theme
            ));
            defaults.theme
        }),
        None => {
            report.record(format!("theme missing; using preferred {}", defaults.theme));
            defaults.theme
        }
    };

    let stored_items = stored.items.unwrap_or_else(|| {
        report.record("items missing; defaulted to empty");
        Vec::new()
    });

    let highest_stored = stored_items.iter().filter_map(|item| item.id).max();
    // A stored id at the top of the range leaves the counter parked there;
    // allocation then fails instead of reissuing it.
    let floor = highest_stored.map_or(1, |id| id.checked_add(1).unwrap_or(u64::MAX));
    let mut next_id = match stored.next_id {
        Some(value) if value >= floor => ItemId(value),
        Some(value) => {
            report.record(format!("nextId {} raised to {}", value, floor));
            ItemId(floor)
        }
        None => {
            report.record(format!("nextId missing; set to {}", floor));
            ItemId(floor)
        }
    };

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(stored_items.len());
    for stored_item in stored_items {
        let id = match stored_item.id.map(ItemId) {
            Some(id) if seen.insert(id) => id,
            stored_id => {
                let Some(fresh) = issue(&mut next_id) else {
                    report.record("item dropped: no ids left to renumber it");
                    continue;
                };
                seen.insert(fresh);
                report.record(match stored_id {
                    Some(id) => format!("duplicate item {} renumbered to {}", id, fresh),
                    None => format!("item without id assigned {}", fresh),
                });
                fresh
            }
        };
        items.push(migrate_item(id, stored_item, &mut report));
    }

    let editing_id = match stored.editing_id.map(ItemId) {
        Some(id) if seen.contains(&id) => Some(id),
        Some(id) => {
            report.record(format!("edit of missing item {} dropped", id));
            None
        }
        None => None,
    };

    Migrated {
        state: LedgerState {
            budget,
            items,
            next_id,
            currency,
            editing_id,
            theme,
        },
        report,
    }
}

fn issue(next_id: &mut ItemId) -> Option<ItemId> {
    let id = *next_id;
    *next_id = id.next()?;
    Some(id)
}

fn migrate_item(id: ItemId, stored: StoredItem, report: &mut MigrationReport) -> Item {
    let legacy = stored.is_legacy();
    let name = match stored.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            report.record(format!("item {} had no name", id));
            format!("Item {}", id.get())
        }
    };
    let stored_amount = stored.amount.filter(|value| value.is_finite());

    if legacy {
        let amount = stored_amount.unwrap_or(0.0);
        report.record(format!(
            "legacy item {} back-filled with quantity and unit price",
            id
        ));
        return Item {
            id,
            name,
            qty: stored.qty.unwrap_or(1.0),
            unit_price: stored.unit_price.unwrap_or(amount),
            amount,
        };
    }

    let qty = stored.qty.unwrap_or(1.0);
    let unit_price = stored.unit_price.unwrap_or(0.0);
    let amount = stored_amount.unwrap_or_else(|| {
        report.record(format!("item {} amount recomputed", id));
        qty * unit_price
    });
    Item {
        id,
        name,
        qty,
        unit_price,
        amount,
    }
}
