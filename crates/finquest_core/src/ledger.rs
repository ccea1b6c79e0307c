//! Portfolio ledger
//!
//! Pure operations over per-category balances. Contribution validation is the
//! caller's job; the ledger adds unconditionally and then checks that every
//! balance is finite and non-negative.

use crate::error::LedgerError;
use crate::model::{AssetCategory, CategoryAmounts};

/// Credit each category with its contribution
pub fn apply_contributions(
    portfolio: &CategoryAmounts,
    contributions: &CategoryAmounts,
) -> Result<CategoryAmounts, LedgerError> {
    let next = CategoryAmounts::from_fn(|c| portfolio.get(c) + contributions.get(c));
    check_invariants(&next)?;
    Ok(next)
}

/// Add each category's period return. Losses are floored at zero; savings
/// never receives a return.
pub fn apply_returns(
    portfolio: &CategoryAmounts,
    returns: &CategoryAmounts,
) -> Result<CategoryAmounts, LedgerError> {
    let next = CategoryAmounts::from_fn(|c| match c {
        AssetCategory::Savings => portfolio.get(c),
        _ => {
            let balance = portfolio.get(c) + returns.get(c);
            if balance < 0.0 { 0.0 } else { balance }
        }
    });
    check_invariants(&next)?;
    Ok(next)
}

#[must_use]
pub fn total_value(portfolio: &CategoryAmounts) -> f64 {
    portfolio.total()
}

pub fn check_invariants(portfolio: &CategoryAmounts) -> Result<(), LedgerError> {
    for (category, balance) in portfolio.iter() {
        if !balance.is_finite() {
            return Err(LedgerError::NonFiniteBalance { category });
        }
        if balance < 0.0 {
            return Err(LedgerError::NegativeBalance { category, balance });
        }
    }
    Ok(())
}
