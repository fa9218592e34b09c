//! `LedgerEngine`: one configured entry point for the whole pipeline.
//!
//! The engine holds nothing but its configuration, so one instance can be
//! shared freely across threads and groups.

use chrono::{DateTime, Utc};
use splitledger_types::{
    BalanceSheet, Contribution, Expense, ExpenseId, GroupId, LedgerConfig, LedgerError, Member,
    Result, Settlement,
};

use crate::summary::GroupSummary;

/// Configured facade over resolve → aggregate → plan.
#[derive(Debug, Clone, Default)]
pub struct LedgerEngine {
    config: LedgerConfig,
}

impl LedgerEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Signed contributions of a single expense.
    pub fn resolve(&self, expense: &Expense) -> Result<Vec<Contribution>> {
        splitledger_ledger::resolve(expense, &self.config)
    }

    /// Net balance per roster member.
    pub fn aggregate(&self, members: &[Member], expenses: &[Expense]) -> Result<BalanceSheet> {
        splitledger_ledger::aggregate(members, expenses, &self.config)
    }

    /// Settlement plan zeroing `balances`.
    pub fn plan(&self, balances: &BalanceSheet) -> Result<Vec<Settlement>> {
        if balances.len() > self.config.max_members {
            return Err(LedgerError::LimitExceeded {
                what: "balances",
                limit: self.config.max_members,
                actual: balances.len(),
            });
        }
        crate::planner::plan(balances)
    }

    /// Group dashboard / balance screen data.
    pub fn summarize(&self, members: &[Member], expenses: &[Expense]) -> Result<GroupSummary> {
        crate::summary::summarize(members, expenses, &self.config)
    }

    /// Expense record for an executed settlement, with a fresh ID.
    pub fn settle_up(
        &self,
        group_id: GroupId,
        settlement: &Settlement,
        at: DateTime<Utc>,
    ) -> Result<Expense> {
        crate::settle_up::settle_up(group_id, settlement, ExpenseId::new(), at)
    }
}
