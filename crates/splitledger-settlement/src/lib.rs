//! # splitledger-settlement
//!
//! **Settlement plane**: turns net balances into a short list of payments
//! and feeds executed payments back into the ledger.
//!
//! ## Architecture
//!
//! Given a conserved [`BalanceSheet`](splitledger_types::BalanceSheet):
//! 1. Refuses imbalanced input (`LedgerImbalance`)
//! 2. Plans settlements greedily, largest creditor against largest debtor
//! 3. Verifies the plan zeros every balance
//! 4. Fingerprints the plan for determinism checks
//! 5. Records executed settlements as settle-up expenses
//!
//! [`LedgerEngine`] wires the ledger and settlement crates behind one
//! configured facade; [`summarize`] builds the group dashboard view.

pub mod digest;
pub mod engine;
pub mod plan_verifier;
pub mod planner;
pub mod settle_up;
pub mod summary;

pub use digest::{PlanDigest, plan_digest, verify_plan_digest};
pub use engine::LedgerEngine;
pub use plan_verifier::{apply_plan, verify_plan};
pub use planner::plan;
pub use settle_up::{settle_up, settle_up_all};
pub use summary::{BalanceStatus, GroupSummary, MemberLine, SettlementLine, summarize};
