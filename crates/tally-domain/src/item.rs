//! Line items purchased against the budget.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Amounted;

/// Identifier issued from the ledger's `next_id` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    pub const FIRST: ItemId = ItemId(1);

    pub fn get(self) -> u64 {
        self.0
    }

    /// `None` once the id space is used up.
    pub fn next(self) -> Option<ItemId> {
        self.0.checked_add(1).map(ItemId)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One purchasable line entry contributing to spend.
///
/// `amount` is stored alongside `qty` and `unit_price` so that records written
/// before quantities existed keep their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub qty: f64,
    pub unit_price: f64,
    pub amount: f64,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, qty: f64, unit_price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            qty,
            unit_price,
            amount: qty * unit_price,
        }
    }

    /// Overwrites the editable fields and recomputes `amount`. The id is kept.
    pub fn revise(&mut self, name: impl Into<String>, qty: f64, unit_price: f64) {
        self.name = name.into();
        self.qty = qty;
        self.unit_price = unit_price;
        self.amount = qty * unit_price;
    }

    /// Contribution to spend, falling back to `qty * unit_price` when the stored
    /// amount is not a usable number.
    pub fn total(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            self.qty * self.unit_price
        }
    }

    pub fn view(&self) -> ItemView {
        ItemView::from(self)
    }
}

impl Amounted for Item {
    fn amount(&self) -> f64 {
        self.total()
    }
}

/// Read-only copy of an item's fields, handed to editors for pre-population.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub qty: f64,
    pub unit_price: f64,
    pub amount: f64,
}

impl ItemView {
    /// True when the entry should be shown as `qty × unit price`.
    pub fn is_multiple(&self) -> bool {
        self.qty > 1.0
    }
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            qty: item.qty,
            unit_price: item.unit_price,
            amount: item.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_derives_amount() {
        let item = Item::new(ItemId(4), "Coffee", 2.0, 3.5);
        assert_eq!(item.amount, 7.0);
        assert_eq!(item.total(), 7.0);
    }

    #[test]
    fn revise_keeps_id_and_recomputes_amount() {
        let mut item = Item::new(ItemId(9), "Tea", 1.0, 2.0);
        item.revise("Green tea", 3.0, 2.5);
        assert_eq!(item.id, ItemId(9));
        assert_eq!(item.name, "Green tea");
        assert_eq!(item.amount, 7.5);
    }

    #[test]
    fn total_falls_back_when_amount_is_not_finite() {
        let mut item = Item::new(ItemId(1), "Bread", 2.0, 1.25);
        item.amount = f64::NAN;
        assert_eq!(item.total(), 2.5);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let item = Item::new(ItemId(1), "Milk", 1.0, 0.99);
        let json = serde_json::to_value(&item).expect("serialize item");
        assert_eq!(json["unitPrice"], 0.99);
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn view_reports_multiples() {
        let single = Item::new(ItemId(1), "Pen", 1.0, 2.0).view();
        let several = Item::new(ItemId(2), "Pens", 3.0, 2.0).view();
        assert!(!single.is_multiple());
        assert!(several.is_multiple());
    }
}
