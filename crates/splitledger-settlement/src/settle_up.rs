//! Settle up: turn a planned settlement into a ledger entry.
//!
//! A payment from debtor to creditor is recorded as an ordinary expense:
//! the debtor "pays" `amount`, and the whole amount is the creditor's share.
//! Resolving it yields `{debtor: +amount, creditor: -amount}`, which cancels
//! exactly that part of the outstanding balances. Persisting the record is
//! the caller's job.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use splitledger_types::{
    Expense, ExpenseCategory, ExpenseId, GroupId, LedgerError, Result, Settlement, SplitPolicy,
    constants,
};

/// Build the expense record for one executed settlement.
///
/// # Errors
/// Returns [`LedgerError::SettlementRejected`] if the settlement is a
/// self-payment or has a non-positive amount.
pub fn settle_up(
    group_id: GroupId,
    settlement: &Settlement,
    expense_id: ExpenseId,
    at: DateTime<Utc>,
) -> Result<Expense> {
    if !settlement.is_well_formed() {
        return Err(LedgerError::SettlementRejected {
            reason: format!("cannot record malformed settlement {settlement}"),
        });
    }

    let shares = BTreeMap::from([
        (settlement.from, Decimal::ZERO),
        (settlement.to, settlement.amount),
    ]);

    tracing::debug!(
        group = %group_id,
        expense = %expense_id,
        from = %settlement.from,
        to = %settlement.to,
        amount = %settlement.amount,
        "Settle-up record built"
    );

    Ok(Expense {
        id: expense_id,
        group_id,
        amount: settlement.amount,
        payer: settlement.from,
        split: SplitPolicy::Custom { shares },
        category: ExpenseCategory::Other,
        note: Some(constants::SETTLEMENT_NOTE.to_string()),
        created_at: at,
    })
}

/// Build settle-up records for a whole plan, with fresh expense IDs.
pub fn settle_up_all(
    group_id: GroupId,
    plan: &[Settlement],
    at: DateTime<Utc>,
) -> Result<Vec<Expense>> {
    plan.iter()
        .map(|settlement| settle_up(group_id, settlement, ExpenseId::new(), at))
        .collect()
}
