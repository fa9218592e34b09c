//! Balance aggregation: expenses → one net balance per member.
//!
//! ```text
//! aggregate(members, expenses) -> BalanceSheet
//! ```
//!
//! 1. Start every roster member at zero, so members without expenses still
//!    appear (the planner needs the complete vector)
//! 2. Resolve each expense and fold its contributions into the sheet
//! 3. Check conservation: Σ balances == 0 within the configured tolerance
//!
//! Any failure aborts the whole aggregation. There is no partial result.

use std::collections::BTreeSet;

use splitledger_types::{BalanceSheet, Expense, LedgerConfig, LedgerError, Member, Result};

use crate::{conservation::verify_zero_sum, split_resolver::resolve};

/// Fold all `expenses` into a balance sheet covering every roster member.
///
/// # Errors
/// - [`LedgerError::LimitExceeded`] if the roster or expense list is larger
///   than configured
/// - [`LedgerError::DuplicateMember`] if the roster repeats a member ID
/// - [`LedgerError::ExpenseRejected`] wrapping the resolver error,
///   [`LedgerError::UnknownMember`] for a participant missing from the roster,
///   or [`LedgerError::InvalidAmount`] when a balance overflows
/// - [`LedgerError::LedgerImbalance`] if the final balances do not conserve
pub fn aggregate(
    members: &[Member],
    expenses: &[Expense],
    config: &LedgerConfig,
) -> Result<BalanceSheet> {
    if members.len() > config.max_members {
        return Err(LedgerError::LimitExceeded {
            what: "members",
            limit: config.max_members,
            actual: members.len(),
        });
    }
    if expenses.len() > config.max_expenses {
        return Err(LedgerError::LimitExceeded {
            what: "expenses",
            limit: config.max_expenses,
            actual: expenses.len(),
        });
    }

    let mut roster = BTreeSet::new();
    if let Some(dup) = members.iter().find(|m| !roster.insert(m.id)) {
        return Err(LedgerError::DuplicateMember(dup.id));
    }
    let mut sheet = BalanceSheet::zeroed(roster);

    for expense in expenses {
        let contributions = resolve(expense, config).map_err(|source| {
            tracing::debug!(
                expense = %expense.id,
                error = %source,
                "Expense rejected during aggregation"
            );
            LedgerError::ExpenseRejected {
                expense: expense.id,
                source: Box::new(source),
            }
        })?;

        for contribution in &contributions {
            if !sheet.contains(&contribution.member) {
                return Err(LedgerError::ExpenseRejected {
                    expense: expense.id,
                    source: Box::new(LedgerError::UnknownMember(contribution.member)),
                });
            }
            sheet
                .credit(contribution.member, contribution.amount)
                .map_err(|source| LedgerError::ExpenseRejected {
                    expense: expense.id,
                    source: Box::new(source),
                })?;
        }
    }

    verify_zero_sum(&sheet, config.imbalance_tolerance())?;

    tracing::info!(
        members = sheet.len(),
        expenses = expenses.len(),
        outstanding = ?sheet.total_owed().ok(),
        "Balances aggregated"
    );

    Ok(sheet)
}
