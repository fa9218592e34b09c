//! Configuration for the ledger engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result, constants};

/// Engine-wide configuration.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Decimal places of the smallest currency unit (2 for paise / cents).
    pub minor_unit_scale: u32,
    /// Residual the aggregator accepts before raising an imbalance, in
    /// minor units. The planner ignores this and always requires zero.
    pub imbalance_tolerance_units: u32,
    /// Maximum members on a roster / balance sheet.
    pub max_members: usize,
    /// Maximum expenses in one aggregation.
    pub max_expenses: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            minor_unit_scale: constants::DEFAULT_MINOR_UNIT_SCALE,
            imbalance_tolerance_units: constants::DEFAULT_IMBALANCE_TOLERANCE_UNITS,
            max_members: constants::DEFAULT_MAX_MEMBERS,
            max_expenses: constants::DEFAULT_MAX_EXPENSES,
        }
    }
}

impl LedgerConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are in range.
    ///
    /// # Errors
    /// Returns [`LedgerError::Configuration`] describing the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.minor_unit_scale > constants::MAX_MINOR_UNIT_SCALE {
            return Err(LedgerError::Configuration(format!(
                "minor_unit_scale {} exceeds maximum {}",
                self.minor_unit_scale,
                constants::MAX_MINOR_UNIT_SCALE
            )));
        }
        if self.max_members == 0 {
            return Err(LedgerError::Configuration(
                "max_members must be > 0".to_string(),
            ));
        }
        if self.max_expenses == 0 {
            return Err(LedgerError::Configuration(
                "max_expenses must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The smallest currency unit as a decimal (0.01 at scale 2).
    #[must_use]
    pub fn minor_unit(&self) -> Decimal {
        Decimal::new(1, self.minor_unit_scale)
    }

    /// Aggregator tolerance as a decimal amount.
    #[must_use]
    pub fn imbalance_tolerance(&self) -> Decimal {
        Decimal::from(self.imbalance_tolerance_units) * self.minor_unit()
    }
}
