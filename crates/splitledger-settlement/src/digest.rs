//! Plan digests for determinism checks and cache invalidation.
//!
//! The same balances must always produce the same plan. A digest is a
//! SHA-256 over the ordered settlements, so two plans can be compared (or a
//! cached plan validated) without shipping full payloads around.

use sha2::{Digest, Sha256};
use splitledger_types::{Settlement, constants};

/// SHA-256 fingerprint of an ordered settlement list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanDigest(pub [u8; 32]);

impl PlanDigest {
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for PlanDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "plan:{}", hex::encode(&self.0[..8]))
    }
}

/// Compute the digest of `plan`.
///
/// Depends on settlement order, parties, and amounts. Amounts are hashed in
/// normalized form, so `100` and `100.00` hash the same.
#[must_use]
pub fn plan_digest(plan: &[Settlement]) -> PlanDigest {
    let mut hasher = Sha256::new();
    hasher.update(constants::PLAN_DIGEST_DOMAIN);
    hasher.update((plan.len() as u64).to_le_bytes());

    for settlement in plan {
        hasher.update(settlement.from.0.as_bytes());
        hasher.update(settlement.to.0.as_bytes());
        let amount = settlement.amount.normalize().to_string();
        hasher.update((amount.len() as u64).to_le_bytes());
        hasher.update(amount.as_bytes());
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    PlanDigest(digest)
}

/// Recompute the digest of `plan` and compare it with `expected`.
#[must_use]
pub fn verify_plan_digest(plan: &[Settlement], expected: &PlanDigest) -> bool {
    plan_digest(plan) == *expected
}
