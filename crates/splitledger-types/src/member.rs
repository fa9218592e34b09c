//! Group members, as supplied by the membership subsystem.

use serde::{Deserialize, Serialize};

use crate::MemberId;

/// A member of an expense-sharing group. Only referenced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub display_name: String,
}

impl Member {
    #[must_use]
    pub fn new(id: MemberId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Member {
    /// Member with a small integer ID; lower `n` sorts first.
    pub fn named(n: u128, display_name: &str) -> Self {
        Self::new(MemberId::from_u128(n), display_name)
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id.short())
    }
}
