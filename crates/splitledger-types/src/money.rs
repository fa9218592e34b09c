//! Minor-unit conversion helpers.
//!
//! Amounts travel through the engine as [`Decimal`]. Division that must not
//! leak (equal splits) happens on integer minor units instead, so every
//! amount entering the engine has to be exactly representable at the
//! configured scale.

use rust_decimal::Decimal;

use crate::{LedgerError, Result};

/// Convert `amount` to an integer count of minor units at `scale`.
///
/// Returns `None` if `amount` carries more decimal places than `scale`
/// (e.g. `1.005` at scale 2).
#[must_use]
pub fn to_minor_units(amount: Decimal, scale: u32) -> Option<i128> {
    if amount.normalize().scale() > scale {
        return None;
    }
    let mut rescaled = amount;
    rescaled.rescale(scale);
    (rescaled.scale() == scale).then(|| rescaled.mantissa())
}

/// Convert a minor-unit count back into a decimal amount at `scale`.
pub fn from_minor_units(units: i128, scale: u32) -> Result<Decimal> {
    Decimal::try_from_i128_with_scale(units, scale).map_err(|e| {
        LedgerError::Internal(format!("minor units {units} at scale {scale}: {e}"))
    })
}

/// Whether `amount` is exactly representable at `scale`.
#[must_use]
pub fn is_representable(amount: Decimal, scale: u32) -> bool {
    to_minor_units(amount, scale).is_some()
}

/// `lhs + rhs`, or [`LedgerError::InvalidAmount`] naming `what` if the result
/// leaves the `Decimal` range.
pub fn checked_add(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| LedgerError::InvalidAmount {
        amount: rhs,
        reason: format!("{what} overflows when adding {rhs} to {lhs}"),
    })
}

/// Sum of `values`, failing on the first partial sum that overflows.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>, what: &str) -> Result<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| checked_add(acc, value, what))
}
