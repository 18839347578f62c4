//! The ledger state machine.
//!
//! Every command validates its input, mutates the in-memory ledger, then writes
//! the whole ledger to the slot before returning. Rejected commands leave the
//! ledger untouched. A failed save does not undo the mutation; it is reported
//! through [`Outcome::storage_warning`].

use tally_domain::{
    Item, ItemId, ItemView, LedgerDefaults, LedgerSnapshot, LedgerState, LedgerTotals,
};
use tracing::{debug, info, warn};

use crate::{
    outcome::{ItemCommit, Outcome},
    persistence::{LoadReport, PersistenceAdapter},
    validation, CoreError,
};

#[derive(Debug)]
pub struct LedgerStore {
    state: LedgerState,
    persistence: PersistenceAdapter,
}

impl LedgerStore {
    /// Restores the ledger from `persistence`, falling back to `defaults`.
    pub fn open(persistence: PersistenceAdapter, defaults: &LedgerDefaults) -> (Self, LoadReport) {
        let (state, report) = persistence.restore(defaults);
        info!(
            source = %report.source,
            items = state.items.len(),
            migrations = report.migrations.len(),
            "ledger opened"
        );
        (Self { state, persistence }, report)
    }

    /// Ledger backed by a process-local slot.
    pub fn in_memory(defaults: &LedgerDefaults) -> Self {
        Self::open(PersistenceAdapter::in_memory(), defaults).0
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn set_budget(&mut self, amount: f64) -> Result<Outcome<LedgerSnapshot>, CoreError> {
        let amount = validation::budget_amount(amount)?;
        self.state.budget = amount;
        debug!(budget = amount, "budget set");
        Ok(self.commit_snapshot())
    }

    pub fn add_to_budget(&mut self, delta: f64) -> Result<Outcome<LedgerSnapshot>, CoreError> {
        let delta = validation::budget_delta(delta)?;
        self.state.budget += delta;
        debug!(delta, budget = self.state.budget, "budget adjusted");
        Ok(self.commit_snapshot())
    }

    pub fn reset_budget(&mut self) -> Outcome<LedgerSnapshot> {
        self.state.budget = 0.0;
        debug!("budget reset");
        self.commit_snapshot()
    }

    /// Adds a new item, or saves the item being edited when an edit is in progress.
    pub fn add_or_update_item(
        &mut self,
        name: &str,
        qty: f64,
        unit_price: f64,
    ) -> Result<Outcome<ItemCommit>, CoreError> {
        let input = validation::item_input(name, qty, unit_price)?;

        let editing = self.state.editing_id.take();
        let updated = editing.and_then(|id| {
            let item = self.state.item_mut(id)?;
            item.revise(input.name.clone(), input.qty, input.unit_price);
            Some(id)
        });
        if let (Some(id), None) = (editing, updated) {
            warn!(item = %id, "edited item vanished; adding as new item");
        }

        let (id, created) = match updated {
            Some(id) => {
                debug!(item = %id, "item updated");
                (id, false)
            }
            None => {
                let Some(id) = self.state.allocate_id() else {
                    self.state.editing_id = editing;
                    warn!("item id counter exhausted");
                    return Err(CoreError::validation("no item ids left to issue"));
                };
                self.state
                    .items
                    .push(Item::new(id, input.name, input.qty, input.unit_price));
                debug!(item = %id, "item added");
                (id, true)
            }
        };

        Ok(self.commit_snapshot().map(|snapshot| ItemCommit {
            id,
            created,
            snapshot,
        }))
    }

    /// Marks `id` as being edited and returns its current fields.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<Outcome<ItemView>, CoreError> {
        let view = self
            .state
            .item(id)
            .map(ItemView::from)
            .ok_or(CoreError::ItemNotFound(id))?;
        self.state.editing_id = Some(id);
        debug!(item = %id, "edit started");
        Ok(self.commit(view))
    }

    pub fn cancel_edit(&mut self) -> Outcome<LedgerSnapshot> {
        if let Some(id) = self.state.editing_id.take() {
            debug!(item = %id, "edit cancelled");
        }
        self.commit_snapshot()
    }

    /// Removes `id` if present. Removing an unknown id is not an error.
    pub fn remove_item(&mut self, id: ItemId) -> Outcome<LedgerSnapshot> {
        let before = self.state.items.len();
        self.state.items.retain(|item| item.id != id);
        if self.state.items.len() != before {
            debug!(item = %id, "item removed");
        }
        if self.state.editing_id == Some(id) {
            self.state.editing_id = None;
        }
        self.commit_snapshot()
    }

    pub fn set_currency(&mut self, code: &str) -> Result<Outcome<LedgerSnapshot>, CoreError> {
        let currency = validation::currency_code(code)?;
        debug!(currency = %currency, "currency set");
        self.state.currency = currency;
        Ok(self.commit_snapshot())
    }

    pub fn toggle_theme(&mut self) -> Outcome<LedgerSnapshot> {
        self.state.theme = self.state.theme.toggled();
        debug!(theme = %self.state.theme, "theme toggled");
        self.commit_snapshot()
    }

    /// Resets budget, items and the id counter. Currency and theme are kept.
    pub fn clear_all(&mut self) -> Outcome<LedgerSnapshot> {
        self.state = LedgerState::fresh(self.state.currency.clone(), self.state.theme);
        info!("ledger cleared");
        self.commit_snapshot()
    }

    pub fn spent(&self) -> f64 {
        self.state.spent()
    }

    pub fn remaining(&self) -> f64 {
        self.state.remaining()
    }

    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals::of(&self.state)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::capture(&self.state)
    }

    pub fn item(&self, id: ItemId) -> Option<ItemView> {
        self.state.item(id).map(ItemView::from)
    }

    pub fn is_editing(&self) -> bool {
        self.state.editing_id.is_some()
    }

    pub fn editing(&self) -> Option<ItemView> {
        self.state.editing_id.and_then(|id| self.item(id))
    }

    fn commit_snapshot(&self) -> Outcome<LedgerSnapshot> {
        let snapshot = self.snapshot();
        self.commit(snapshot)
    }

    fn commit<T>(&self, value: T) -> Outcome<T> {
        match self.persistence.save(&self.state) {
            Ok(()) => Outcome::persisted(value),
            Err(err) => {
                warn!(error = %err, "ledger change not persisted");
                Outcome::unpersisted(value, err)
            }
        }
    }
}
