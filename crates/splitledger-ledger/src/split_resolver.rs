//! Split resolution: one expense → signed per-member contributions.
//!
//! ```text
//! resolve(Expense) -> [Contribution]      Σ contribution == 0
//! ```
//!
//! ## Equal split
//!
//! The amount is converted to integer minor units and divided by the
//! participant count. When the division is inexact, the leftover units are
//! handed out one at a time to participants in ascending member ID order:
//!
//! ```text
//! 100.00 / 3  →  10000 units / 3 = 3333 rem 1
//!             →  lowest id: 33.34, others: 33.33
//! ```
//!
//! ## Custom split
//!
//! The caller supplies every share. Shares must be non-negative, exact at
//! the minor-unit scale, and add up to the amount with no rounding leakage.
//!
//! ## Contributions
//!
//! The payer gets `amount - own share`; everyone else gets `-share`.

use rust_decimal::Decimal;
use splitledger_types::{
    Contribution, Expense, LedgerConfig, LedgerError, MemberId, Result, SplitPolicy, money,
};

/// Resolve an expense into one contribution per participant, in ascending
/// member ID order.
///
/// # Errors
/// - [`LedgerError::InvalidAmount`] if the amount is not strictly positive or
///   is finer than the minor unit
/// - [`LedgerError::EmptyParticipants`] if the split names nobody
/// - [`LedgerError::PayerNotParticipant`] if the payer is not in the split
/// - [`LedgerError::InvalidSplit`] if custom shares are malformed or do not
///   sum to the amount
pub fn resolve(expense: &Expense, config: &LedgerConfig) -> Result<Vec<Contribution>> {
    let shares = shares(expense, config)?;

    let contributions: Vec<Contribution> = shares
        .into_iter()
        .map(|(member, share)| {
            let amount = if member == expense.payer {
                expense.amount - share
            } else {
                -share
            };
            Contribution::new(member, amount)
        })
        .collect();

    let residual = money::checked_sum(contributions.iter().map(|c| c.amount), "contributions")?;
    if !residual.is_zero() {
        tracing::error!(
            expense = %expense.id,
            residual = %residual,
            "Split resolution leaked: contributions do not sum to zero"
        );
        return Err(LedgerError::LedgerImbalance {
            residual,
            detail: format!("contributions of {} sum to {residual}", expense.id),
        });
    }

    tracing::debug!(
        expense = %expense.id,
        payer = %expense.payer,
        amount = %expense.amount,
        participants = contributions.len(),
        "Expense resolved"
    );

    Ok(contributions)
}

/// Each participant's share of the expense, in ascending member ID order.
///
/// Shares always sum to the expense amount exactly.
pub fn shares(expense: &Expense, config: &LedgerConfig) -> Result<Vec<(MemberId, Decimal)>> {
    let scale = config.minor_unit_scale;
    let amount_units = amount_in_units(expense.amount, scale)?;

    if expense.split.participant_count() == 0 {
        return Err(LedgerError::EmptyParticipants);
    }
    if !expense.split.includes(&expense.payer) {
        return Err(LedgerError::PayerNotParticipant {
            payer: expense.payer,
        });
    }

    match &expense.split {
        SplitPolicy::Equal { .. } => {
            equal_shares(amount_units, &expense.split.participants(), scale)
        }
        SplitPolicy::Custom { shares } => {
            let ordered: Vec<(MemberId, Decimal)> =
                shares.iter().map(|(m, s)| (*m, *s)).collect();
            validate_custom_shares(expense.amount, &ordered, scale)?;
            Ok(ordered)
        }
    }
}

/// Expense amount in minor units; must be strictly positive and exact.
fn amount_in_units(amount: Decimal, scale: u32) -> Result<i128> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount {
            amount,
            reason: "amount must be strictly positive".to_string(),
        });
    }
    money::to_minor_units(amount, scale).ok_or_else(|| LedgerError::InvalidAmount {
        amount,
        reason: format!("more precise than the minor unit (scale {scale})"),
    })
}

/// Divide `amount_units` across `participants` (already ascending).
/// The first `remainder` participants get one extra unit.
fn equal_shares(
    amount_units: i128,
    participants: &[MemberId],
    scale: u32,
) -> Result<Vec<(MemberId, Decimal)>> {
    let count = i128::try_from(participants.len())
        .map_err(|_| LedgerError::Internal("participant count overflow".to_string()))?;
    let base = amount_units / count;
    let remainder = usize::try_from(amount_units % count)
        .map_err(|_| LedgerError::Internal("negative split remainder".to_string()))?;

    participants
        .iter()
        .enumerate()
        .map(|(idx, member)| {
            let units = if idx < remainder { base + 1 } else { base };
            Ok((*member, money::from_minor_units(units, scale)?))
        })
        .collect()
}

fn validate_custom_shares(
    amount: Decimal,
    shares: &[(MemberId, Decimal)],
    scale: u32,
) -> Result<()> {
    let mut sum = Decimal::ZERO;
    for (member, share) in shares {
        if *share < Decimal::ZERO {
            return Err(LedgerError::InvalidSplit {
                reason: format!("negative share {share} for member {member}"),
            });
        }
        if !money::is_representable(*share, scale) {
            return Err(LedgerError::InvalidSplit {
                reason: format!(
                    "share {share} for member {member} is finer than the minor unit (scale {scale})"
                ),
            });
        }
        sum = sum.checked_add(*share).ok_or_else(|| LedgerError::InvalidSplit {
            reason: format!("shares overflow at member {member}, expected {amount}"),
        })?;
    }

    if sum != amount {
        return Err(LedgerError::InvalidSplit {
            reason: format!("shares sum to {sum}, expected {amount}"),
        });
    }
    Ok(())
}
