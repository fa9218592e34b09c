//! Error types for the SplitLedger balance engine.
//!
//! All errors use the `SL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Expense validation errors (malformed input, never retried)
//! - 2xx: Ledger consistency errors (engine bug or corrupted data)
//! - 3xx: Settlement errors
//! - 9xx: Configuration / limits / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{ExpenseId, MemberId};

/// Central error enum for all SplitLedger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Expense Validation Errors (1xx)
    // =================================================================
    /// Custom shares do not add up to the expense amount, or a share is
    /// negative / finer than the smallest currency unit.
    #[error("SL_ERR_100: Invalid split: {reason}")]
    InvalidSplit { reason: String },

    /// The split names no participants.
    #[error("SL_ERR_101: Split has no participants")]
    EmptyParticipants,

    /// The payer is not among the expense participants.
    #[error("SL_ERR_102: Payer {payer} is not a participant of the split")]
    PayerNotParticipant { payer: MemberId },

    /// The expense amount is not strictly positive or not representable in
    /// minor currency units.
    #[error("SL_ERR_103: Invalid amount {amount}: {reason}")]
    InvalidAmount { amount: Decimal, reason: String },

    /// An expense references a member that is not on the group roster.
    #[error("SL_ERR_104: Unknown member: {0}")]
    UnknownMember(MemberId),

    /// The same member appears twice on the group roster.
    #[error("SL_ERR_105: Duplicate member on roster: {0}")]
    DuplicateMember(MemberId),

    /// An expense failed validation during aggregation.
    #[error("SL_ERR_106: Expense {expense} rejected: {source}")]
    ExpenseRejected {
        expense: ExpenseId,
        #[source]
        source: Box<LedgerError>,
    },

    // =================================================================
    // Ledger Consistency Errors (2xx)
    // =================================================================
    /// Balances do not sum to zero — fatal for the current computation.
    #[error("SL_ERR_200: Ledger imbalance: residual {residual} ({detail})")]
    LedgerImbalance { residual: Decimal, detail: String },

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// A settlement entry is malformed (non-positive amount, self-payment,
    /// unknown party).
    #[error("SL_ERR_300: Settlement rejected: {reason}")]
    SettlementRejected { reason: String },

    // =================================================================
    // Configuration / Limits / Internal (9xx)
    // =================================================================
    /// Input exceeds a configured size limit.
    #[error("SL_ERR_900: Limit exceeded: {what} {actual} > {limit}")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// Configuration error (invalid document, out-of-range values).
    #[error("SL_ERR_901: Configuration error: {0}")]
    Configuration(String),

    /// Unrecoverable internal error.
    #[error("SL_ERR_902: Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Whether this error stems from malformed caller input (as opposed to an
    /// internal-consistency fault).
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::InvalidSplit { .. }
            | Self::EmptyParticipants
            | Self::PayerNotParticipant { .. }
            | Self::InvalidAmount { .. }
            | Self::UnknownMember(_)
            | Self::DuplicateMember(_)
            | Self::SettlementRejected { .. }
            | Self::LimitExceeded { .. } => true,
            Self::ExpenseRejected { source, .. } => source.is_input_error(),
            Self::LedgerImbalance { .. } | Self::Configuration(_) | Self::Internal(_) => false,
        }
    }

    /// Strip [`LedgerError::ExpenseRejected`] wrappers and return the
    /// underlying cause.
    #[must_use]
    pub fn root_cause(&self) -> &LedgerError {
        match self {
            Self::ExpenseRejected { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
