//! # splitledger-ledger
//!
//! **Pure ledger computation for SplitLedger.**
//!
//! Turns recorded expenses into per-member net balances. It has:
//!
//! - **Zero side effects**: no I/O, no storage, no hidden state
//! - **Exact arithmetic**: equal splits divide integer minor units, and
//!   leftover units go to the lowest member IDs
//! - **Deterministic output**: same input → same balances, every time
//! - **Conservation check**: balances must sum to zero, or the computation
//!   fails with `LedgerImbalance`
//!
//! ```text
//! Expense ──resolve──▶ [Contribution] ──aggregate──▶ BalanceSheet
//! ```

pub mod aggregator;
pub mod conservation;
pub mod split_resolver;

pub use aggregator::aggregate;
pub use conservation::verify_zero_sum;
pub use split_resolver::{resolve, shares};
