//! System-wide constants for the SplitLedger balance engine.

/// Default number of decimal places of the smallest currency unit
/// (paise / cents).
pub const DEFAULT_MINOR_UNIT_SCALE: u32 = 2;

/// Largest supported minor-unit scale.
pub const MAX_MINOR_UNIT_SCALE: u32 = 8;

/// Default aggregator tolerance for a non-zero balance sum, in minor units.
/// The split resolver is exact, so the default accepts no leakage at all.
pub const DEFAULT_IMBALANCE_TOLERANCE_UNITS: u32 = 0;

/// Maximum members accepted on a group roster (default).
pub const DEFAULT_MAX_MEMBERS: usize = 1_000;

/// Maximum expenses accepted in a single aggregation (default).
pub const DEFAULT_MAX_EXPENSES: usize = 100_000;

/// Note attached to expenses recorded by the settle-up action.
pub const SETTLEMENT_NOTE: &str = "Settlement";

/// Domain separator for settlement plan digests.
pub const PLAN_DIGEST_DOMAIN: &[u8] = b"splitledger:plan:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SplitLedger";
