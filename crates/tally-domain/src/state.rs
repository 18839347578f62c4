//! The single persisted ledger aggregate.

use serde::{Deserialize, Serialize};

use crate::{
    common::total_amount,
    currency::CurrencyCode,
    item::{Item, ItemId},
    theme::Theme,
};

/// Values used to fill a fresh ledger or the gaps of a stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerDefaults {
    pub currency: CurrencyCode,
    /// Preferred colour scheme reported by the environment.
    pub theme: Theme,
}

impl LedgerDefaults {
    pub fn new(currency: CurrencyCode, theme: Theme) -> Self {
        Self { currency, theme }
    }
}

impl Default for LedgerDefaults {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    pub budget: f64,
    pub items: Vec<Item>,
    pub next_id: ItemId,
    pub currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing_id: Option<ItemId>,
    pub theme: Theme,
}

impl LedgerState {
    pub fn new(defaults: &LedgerDefaults) -> Self {
        Self::fresh(defaults.currency.clone(), defaults.theme)
    }

    /// Empty ledger carrying over the display preferences.
    pub fn fresh(currency: CurrencyCode, theme: Theme) -> Self {
        Self {
            budget: 0.0,
            items: Vec::new(),
            next_id: ItemId::FIRST,
            currency,
            editing_id: None,
            theme,
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Hands out the next identifier and advances the counter. Returns `None`
    /// without touching the counter when no further id can be issued.
    pub fn allocate_id(&mut self) -> Option<ItemId> {
        let id = self.next_id;
        self.next_id = id.next()?;
        Some(id)
    }

    pub fn spent(&self) -> f64 {
        total_amount(&self.items)
    }

    pub fn remaining(&self) -> f64 {
        self.budget - self.spent()
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new(&LedgerDefaults::default())
    }
}
