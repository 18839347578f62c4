//! Raw persisted shape, read before migration.
//!
//! Every field is optional so that records written by older versions (items
//! holding only `amount`, no theme, no counter) still parse. Filling the gaps
//! is the persistence adapter's job.

use serde::{Deserialize, Serialize};

use crate::{item::ItemId, state::LedgerState};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLedger {
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub items: Option<Vec<StoredItem>>,
    #[serde(default)]
    pub next_id: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub editing_id: Option<u64>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub qty: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl StoredItem {
    /// True for records written before quantity and unit price existed.
    pub fn is_legacy(&self) -> bool {
        self.qty.is_none() || self.unit_price.is_none()
    }
}

impl From<&LedgerState> for StoredLedger {
    fn from(state: &LedgerState) -> Self {
        Self {
            budget: Some(state.budget),
            items: Some(
                state
                    .items
                    .iter()
                    .map(|item| StoredItem {
                        id: Some(item.id.get()),
                        name: Some(item.name.clone()),
                        qty: Some(item.qty),
                        unit_price: Some(item.unit_price),
                        amount: Some(item.amount),
                    })
                    .collect(),
            ),
            next_id: Some(state.next_id.get()),
            currency: Some(state.currency.as_str().to_string()),
            editing_id: state.editing_id.map(ItemId::get),
            theme: Some(state.theme.as_str().to_string()),
        }
    }
}
