//! Balance conservation invariant checker.
//!
//! Mathematical invariant enforced after every aggregation and before every
//! settlement plan:
//! ```text
//! Σ balance(member) == 0
//! ```
//!
//! Money only moves between members; it is never created or destroyed by
//! splitting an expense. A non-zero residual means the resolver leaked or
//! the input was corrupted, and the computation must stop.

use rust_decimal::Decimal;
use splitledger_types::{BalanceSheet, LedgerError, Result};

/// Verify that `balances` sum to zero within `tolerance`.
///
/// A residual inside a non-zero tolerance is accepted but logged; it is
/// never redistributed.
///
/// # Errors
/// - [`LedgerError::LedgerImbalance`] if `|Σ balances| > tolerance`
/// - [`LedgerError::InvalidAmount`] if the sum leaves the `Decimal` range
pub fn verify_zero_sum(balances: &BalanceSheet, tolerance: Decimal) -> Result<()> {
    let residual = balances.total()?;
    if residual.is_zero() {
        return Ok(());
    }

    if residual.abs() > tolerance {
        tracing::error!(
            residual = %residual,
            tolerance = %tolerance,
            members = balances.len(),
            "Ledger imbalance: balances do not sum to zero"
        );
        return Err(LedgerError::LedgerImbalance {
            residual,
            detail: format!(
                "{} balances sum to {residual}, tolerance {tolerance}",
                balances.len()
            ),
        });
    }

    tracing::warn!(
        residual = %residual,
        tolerance = %tolerance,
        "Non-zero balance residual absorbed by tolerance"
    );
    Ok(())
}
