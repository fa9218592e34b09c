//! Per-member net balances for one group.
//!
//! A balance is positive when the member is owed money and negative when
//! the member owes money. Balances are a view derived from the expense
//! list; they are recomputed on demand and never stored as authoritative
//! state.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MemberId, Result, money};

/// Net balance per member, iterated in ascending member ID order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSheet(BTreeMap<MemberId, Decimal>);

impl BalanceSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Create a sheet with every given member at zero.
    pub fn zeroed(members: impl IntoIterator<Item = MemberId>) -> Self {
        members.into_iter().map(|id| (id, Decimal::ZERO)).collect()
    }

    /// Add `amount` (signed) to `member`, creating the entry if needed.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidAmount`](crate::LedgerError::InvalidAmount)
    /// if the balance would overflow; the sheet is left unchanged.
    pub fn credit(&mut self, member: MemberId, amount: Decimal) -> Result<()> {
        let balance = self.0.entry(member).or_insert(Decimal::ZERO);
        *balance = money::checked_add(*balance, amount, "member balance")?;
        Ok(())
    }

    /// Balance of `member`, if present.
    #[must_use]
    pub fn get(&self, member: &MemberId) -> Option<Decimal> {
        self.0.get(member).copied()
    }

    /// Balance of `member`, zero if absent.
    #[must_use]
    pub fn balance_of(&self, member: &MemberId) -> Decimal {
        self.get(member).unwrap_or(Decimal::ZERO)
    }

    #[must_use]
    pub fn contains(&self, member: &MemberId) -> bool {
        self.0.contains_key(member)
    }

    /// Sum of all balances. Zero for a conserved ledger.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidAmount`](crate::LedgerError::InvalidAmount)
    /// if a partial sum overflows.
    pub fn total(&self) -> Result<Decimal> {
        money::checked_sum(self.0.values().copied(), "balance total")
    }

    /// Sum of all positive balances (what creditors are owed).
    pub fn total_owed(&self) -> Result<Decimal> {
        money::checked_sum(
            self.0.values().copied().filter(|b| *b > Decimal::ZERO),
            "outstanding total",
        )
    }

    /// Whether every member is at exactly zero.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.0.values().all(Decimal::is_zero)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(member, balance)` in ascending member ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&MemberId, &Decimal)> {
        self.0.iter()
    }

    pub fn members(&self) -> impl Iterator<Item = &MemberId> {
        self.0.keys()
    }
}

impl FromIterator<(MemberId, Decimal)> for BalanceSheet {
    fn from_iter<I: IntoIterator<Item = (MemberId, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for BalanceSheet {
    type Item = (MemberId, Decimal);
    type IntoIter = std::collections::btree_map::IntoIter<MemberId, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BalanceSheet {
    type Item = (&'a MemberId, &'a Decimal);
    type IntoIter = std::collections::btree_map::Iter<'a, MemberId, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
