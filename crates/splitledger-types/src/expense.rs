//! Expense model: what was paid, by whom, and how it is shared.
//!
//! An [`Expense`] arrives from the expense management subsystem already
//! checked for required fields. Arithmetic validation (positive amount,
//! shares summing to the amount, payer participation) is the split
//! resolver's job.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, GroupId, MemberId};

/// Spending category picked when the expense was recorded.
/// Informational only; it never affects balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Grocery,
    Travel,
    Snacks,
    Bills,
    Rent,
    #[default]
    Other,
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grocery => write!(f, "grocery"),
            Self::Travel => write!(f, "travel"),
            Self::Snacks => write!(f, "snacks"),
            Self::Bills => write!(f, "bills"),
            Self::Rent => write!(f, "rent"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// How an expense amount is divided among participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Divide the amount evenly; leftover minor units go to the lowest IDs.
    Equal { participants: BTreeSet<MemberId> },
    /// Explicit per-member shares that must add up to the amount exactly.
    Custom { shares: BTreeMap<MemberId, Decimal> },
}

impl SplitPolicy {
    /// Participants in ascending ID order.
    #[must_use]
    pub fn participants(&self) -> Vec<MemberId> {
        match self {
            Self::Equal { participants } => participants.iter().copied().collect(),
            Self::Custom { shares } => shares.keys().copied().collect(),
        }
    }

    #[must_use]
    pub fn includes(&self, member: &MemberId) -> bool {
        match self {
            Self::Equal { participants } => participants.contains(member),
            Self::Custom { shares } => shares.contains_key(member),
        }
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        match self {
            Self::Equal { participants } => participants.len(),
            Self::Custom { shares } => shares.len(),
        }
    }
}

/// A recorded group expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// The group this expense belongs to.
    pub group_id: GroupId,
    /// Total amount paid. Must be strictly positive.
    pub amount: Decimal,
    /// Who paid. Must be a participant of `split`.
    pub payer: MemberId,
    pub split: SplitPolicy,
    #[serde(default)]
    pub category: ExpenseCategory,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expense[{}] {} {} paid by {} split {} ways",
            self.id,
            self.category,
            self.amount,
            self.payer.short(),
            self.split.participant_count(),
        )
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    /// Equal split among `participants`, fresh IDs, current timestamp.
    pub fn equal(payer: MemberId, amount: Decimal, participants: &[MemberId]) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id: GroupId::from_u128(0),
            amount,
            payer,
            split: SplitPolicy::Equal {
                participants: participants.iter().copied().collect(),
            },
            category: ExpenseCategory::Other,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Custom split with explicit shares, fresh IDs, current timestamp.
    pub fn custom(payer: MemberId, amount: Decimal, shares: &[(MemberId, Decimal)]) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id: GroupId::from_u128(0),
            amount,
            payer,
            split: SplitPolicy::Custom {
                shares: shares.iter().copied().collect(),
            },
            category: ExpenseCategory::Other,
            note: None,
            created_at: Utc::now(),
        }
    }
}

/// One member's signed effect from a single expense.
///
/// Positive: the member is owed this much. Negative: the member owes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub member: MemberId,
    pub amount: Decimal,
}

impl Contribution {
    #[must_use]
    pub fn new(member: MemberId, amount: Decimal) -> Self {
        Self { member, amount }
    }
}
