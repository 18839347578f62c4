//! Accept/reject rules for command input.

use tally_domain::CurrencyCode;

use crate::CoreError;

/// Item fields that passed validation. `name` is already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub name: String,
    pub qty: f64,
    pub unit_price: f64,
}

pub fn budget_amount(amount: f64) -> Result<f64, CoreError> {
    if !amount.is_finite() {
        return Err(CoreError::validation("budget must be a finite number"));
    }
    if amount < 0.0 {
        return Err(CoreError::validation("budget cannot be negative"));
    }
    Ok(amount)
}

/// Deltas may be negative; only non-numbers are rejected.
pub fn budget_delta(delta: f64) -> Result<f64, CoreError> {
    if !delta.is_finite() {
        return Err(CoreError::validation(
            "amount to add must be a finite number",
        ));
    }
    Ok(delta)
}

pub fn item_input(name: &str, qty: f64, unit_price: f64) -> Result<ItemInput, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::validation("item name is required"));
    }
    if !qty.is_finite() || qty <= 0.0 {
        return Err(CoreError::validation(
            "quantity must be a number greater than zero",
        ));
    }
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(CoreError::validation(
            "unit price must be a non-negative number",
        ));
    }
    Ok(ItemInput {
        name: name.to_string(),
        qty,
        unit_price,
    })
}

pub fn currency_code(code: &str) -> Result<CurrencyCode, CoreError> {
    if code.trim().is_empty() {
        return Err(CoreError::validation("currency code is required"));
    }
    Ok(CurrencyCode::new(code))
}
