//! Read-only views handed to renderers.

use std::{cmp::Ordering, fmt};

use serde::Serialize;

use crate::{
    currency::CurrencyCode,
    item::{Item, ItemId},
    state::LedgerState,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
/// Describes how spending relates to the budget.
pub enum BudgetStatus {
    Empty,
    UnderBudget,
    OnTrack,
    OverBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::Empty => "Empty",
            BudgetStatus::UnderBudget => "Under budget",
            BudgetStatus::OnTrack => "On track",
            BudgetStatus::OverBudget => "Over budget",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
/// Aggregated totals for the ledger.
pub struct LedgerTotals {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
}

impl LedgerTotals {
    pub fn from_parts(budget: f64, spent: f64) -> Self {
        let remaining = budget - spent;
        let status = if budget.abs() < f64::EPSILON && spent.abs() < f64::EPSILON {
            BudgetStatus::Empty
        } else {
            match spent.partial_cmp(&budget).unwrap_or(Ordering::Equal) {
                Ordering::Greater => BudgetStatus::OverBudget,
                Ordering::Less => BudgetStatus::UnderBudget,
                Ordering::Equal => BudgetStatus::OnTrack,
            }
        };
        Self {
            budget,
            spent,
            remaining,
            status,
        }
    }

    pub fn of(state: &LedgerState) -> Self {
        Self::from_parts(state.budget, state.spent())
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Immutable view of the derived ledger state.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
    pub items: Vec<Item>,
    pub currency: CurrencyCode,
    pub editing_id: Option<ItemId>,
    pub theme: Theme,
}

impl LedgerSnapshot {
    pub fn capture(state: &LedgerState) -> Self {
        let totals = LedgerTotals::of(state);
        Self {
            budget: totals.budget,
            spent: totals.spent,
            remaining: totals.remaining,
            status: totals.status,
            items: state.items.clone(),
            currency: state.currency.clone(),
            editing_id: state.editing_id,
            theme: state.theme,
        }
    }

    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals {
            budget: self.budget,
            spent: self.spent,
            remaining: self.remaining,
            status: self.status,
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
