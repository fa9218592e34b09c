//! # splitledger-types
//!
//! Shared types, errors, and configuration for the **SplitLedger** balance
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MemberId`], [`GroupId`], [`ExpenseId`]
//! - **Members**: [`Member`]
//! - **Expense model**: [`Expense`], [`SplitPolicy`], [`ExpenseCategory`], [`Contribution`]
//! - **Balance model**: [`BalanceSheet`]
//! - **Settlement model**: [`Settlement`]
//! - **Money helpers**: minor-unit conversion in [`money`]
//! - **Configuration**: [`LedgerConfig`]
//! - **Errors**: [`LedgerError`] with `SL_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod member;
pub mod money;
pub mod settlement;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitledger_types::{Expense, SplitPolicy, BalanceSheet, ...};

pub use balance::*;
pub use config::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use member::*;
pub use settlement::*;

// Constants and money helpers are accessed via their module paths
// (`splitledger_types::constants::FOO`, `splitledger_types::money::to_minor_units`).
