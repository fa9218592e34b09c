//! Settlement plan verification.
//!
//! Applies a plan to a balance sheet and checks that every member ends at
//! exactly zero. Used by the planner on its own output in debug builds, and
//! available to callers that receive a plan from elsewhere (a cache, a
//! client) and want to check it before showing it.

use rust_decimal::Decimal;
use splitledger_types::{BalanceSheet, LedgerError, Result, Settlement};

/// Apply `plan` to `balances`: each payment raises the payer's balance and
/// lowers the receiver's.
///
/// # Errors
/// - [`LedgerError::SettlementRejected`] if a settlement is malformed or
///   names a member that is not on the sheet
/// - [`LedgerError::InvalidAmount`] if a balance overflows
pub fn apply_plan(balances: &BalanceSheet, plan: &[Settlement]) -> Result<BalanceSheet> {
    let mut sheet = balances.clone();
    for (idx, settlement) in plan.iter().enumerate() {
        if settlement.from == settlement.to {
            return Err(LedgerError::SettlementRejected {
                reason: format!("settlement #{idx} pays {} to itself", settlement.from),
            });
        }
        if settlement.amount <= Decimal::ZERO {
            return Err(LedgerError::SettlementRejected {
                reason: format!(
                    "settlement #{idx} has non-positive amount {}",
                    settlement.amount
                ),
            });
        }
        for party in [settlement.from, settlement.to] {
            if !sheet.contains(&party) {
                return Err(LedgerError::SettlementRejected {
                    reason: format!("settlement #{idx} names unknown member {party}"),
                });
            }
        }
        sheet.credit(settlement.from, settlement.amount)?;
        sheet.credit(settlement.to, -settlement.amount)?;
    }
    Ok(sheet)
}

/// Check that `plan` zeros every balance in `balances`.
///
/// # Errors
/// - [`LedgerError::SettlementRejected`] for a malformed settlement
/// - [`LedgerError::LedgerImbalance`] if any member is left non-zero
pub fn verify_plan(balances: &BalanceSheet, plan: &[Settlement]) -> Result<()> {
    let after = apply_plan(balances, plan)?;
    if let Some((member, residual)) = after.iter().find(|(_, b)| !b.is_zero()) {
        return Err(LedgerError::LedgerImbalance {
            residual: *residual,
            detail: format!("member {member} left at {residual} after applying the plan"),
        });
    }
    Ok(())
}
