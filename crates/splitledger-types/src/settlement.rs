//! Settlement: a proposed payment that reduces outstanding balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::MemberId;

/// "`from` pays `to` `amount`".
///
/// A well-formed settlement has `from != to` and a strictly positive
/// amount; the planner never emits anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settlement {
    /// The debtor making the payment.
    pub from: MemberId,
    /// The creditor receiving it.
    pub to: MemberId,
    pub amount: Decimal,
}

impl Settlement {
    #[must_use]
    pub fn new(from: MemberId, to: MemberId, amount: Decimal) -> Self {
        Self { from, to, amount }
    }

    /// Structural well-formedness (positive amount, distinct parties).
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.from != self.to && self.amount > Decimal::ZERO
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} {}",
            self.from.short(),
            self.to.short(),
            self.amount
        )
    }
}
