//! Settlement planner: balances → minimal "A pays B" transactions.
//!
//! ```text
//! plan(BalanceSheet) -> [Settlement]
//! ```
//!
//! ## Algorithm (greedy debt simplification)
//!
//! 1. Partition members into creditors (balance > 0) and debtors
//!    (balance < 0); zero balances drop out
//! 2. Take the creditor with the largest balance and the debtor with the
//!    largest debt (ties: lower member ID first)
//! 3. Emit `debtor → creditor` for the smaller of the two magnitudes and
//!    reduce both
//! 4. Whoever reaches exactly zero leaves; the other goes back in the queue
//!
//! Every step zeros at least one party, so a sheet with `n` non-zero
//! members produces at most `n - 1` settlements. Both queues are binary
//! heaps, so planning is `O(n log n)`.
//!
//! Exact minimum-transaction settlement is NP-hard; this greedy pass is the
//! standard baseline and is optimal for most small groups.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rust_decimal::Decimal;
use splitledger_ledger::verify_zero_sum;
use splitledger_types::{BalanceSheet, LedgerError, MemberId, Result, Settlement};

use crate::digest::plan_digest;

/// One side of the ledger waiting to be settled.
///
/// Ordered by outstanding magnitude, then by *lower* member ID, so the
/// max-heap pops the largest party and breaks ties toward the smallest ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Party {
    outstanding: Decimal,
    member: MemberId,
}

impl Ord for Party {
    fn cmp(&self, other: &Self) -> Ordering {
        self.outstanding
            .cmp(&other.outstanding)
            .then_with(|| other.member.cmp(&self.member))
    }
}

impl PartialOrd for Party {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Produce a settlement plan that zeros every balance.
///
/// Settlements are returned in generation order (largest first), which is
/// also the suggested display / execution order.
///
/// # Errors
/// Returns [`LedgerError::LedgerImbalance`] if `balances` do not sum to
/// exactly zero. No plan is produced for imbalanced input.
pub fn plan(balances: &BalanceSheet) -> Result<Vec<Settlement>> {
    verify_zero_sum(balances, Decimal::ZERO)?;

    let mut creditors = BinaryHeap::new();
    let mut debtors = BinaryHeap::new();
    for (member, balance) in balances {
        match balance.cmp(&Decimal::ZERO) {
            Ordering::Greater => creditors.push(Party {
                outstanding: *balance,
                member: *member,
            }),
            Ordering::Less => debtors.push(Party {
                outstanding: -*balance,
                member: *member,
            }),
            Ordering::Equal => {}
        }
    }

    let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());

    loop {
        let (Some(&creditor), Some(&debtor)) = (creditors.peek(), debtors.peek()) else {
            break;
        };
        let (mut creditor, mut debtor) = (creditor, debtor);
        creditors.pop();
        debtors.pop();

        let amount = creditor.outstanding.min(debtor.outstanding);
        let settlement = Settlement::new(debtor.member, creditor.member, amount);

        tracing::debug!(
            from = %settlement.from,
            to = %settlement.to,
            amount = %settlement.amount,
            "Settlement planned"
        );
        settlements.push(settlement);

        creditor.outstanding -= amount;
        debtor.outstanding -= amount;
        if !creditor.outstanding.is_zero() {
            creditors.push(creditor);
        }
        if !debtor.outstanding.is_zero() {
            debtors.push(debtor);
        }
    }

    // Σ == 0 guarantees both queues drain together.
    if let Some(left) = creditors.peek().or(debtors.peek()) {
        return Err(LedgerError::Internal(format!(
            "planner left {} with {} outstanding",
            left.member, left.outstanding
        )));
    }

    debug_assert!(
        crate::plan_verifier::verify_plan(balances, &settlements).is_ok(),
        "planner produced a plan that does not zero the balances"
    );

    tracing::info!(
        members = balances.len(),
        settlements = settlements.len(),
        volume = ?balances.total_owed().ok(),
        digest = %plan_digest(&settlements).to_hex(),
        "Settlement plan computed"
    );

    Ok(settlements)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: MemberId = MemberId::from_u128(1);
    const BOB: MemberId = MemberId::from_u128(2);
    const CAROL: MemberId = MemberId::from_u128(3);
    const DAVE: MemberId = MemberId::from_u128(4);

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn sheet(entries: &[(MemberId, i64)]) -> BalanceSheet {
        entries.iter().map(|&(m, a)| (m, dec(a))).collect()
    }

    #[test]
    fn empty_sheet_needs_no_settlements() {
        assert!(plan(&BalanceSheet::new()).unwrap().is_empty());
    }

    #[test]
    fn settled_sheet_needs_no_settlements() {
        let s = sheet(&[(ALICE, 0), (BOB, 0)]);
        assert!(plan(&s).unwrap().is_empty());
    }

    #[test]
    fn one_creditor_two_debtors_tie_breaks_by_id() {
        let s = sheet(&[(ALICE, 200), (BOB, -100), (CAROL, -100)]);
        let p = plan(&s).unwrap();
        assert_eq!(
            p,
            vec![
                Settlement::new(BOB, ALICE, dec(100)),
                Settlement::new(CAROL, ALICE, dec(100)),
            ]
        );
    }

    #[test]
    fn largest_parties_settle_first() {
        let s = sheet(&[(ALICE, 50), (BOB, 150), (CAROL, -120), (DAVE, -80)]);
        let p = plan(&s).unwrap();
        // BOB(150) vs CAROL(120) → 120; then ALICE(50) vs DAVE(80) → 50;
        // then BOB(30) vs DAVE(30) → 30
        assert_eq!(
            p,
            vec![
                Settlement::new(CAROL, BOB, dec(120)),
                Settlement::new(DAVE, ALICE, dec(50)),
                Settlement::new(DAVE, BOB, dec(30)),
            ]
        );
    }

    #[test]
    fn exact_pairs_settle_in_one_step_each() {
        let s = sheet(&[(ALICE, 70), (BOB, -70), (CAROL, 30), (DAVE, -30)]);
        let p = plan(&s).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p[0], Settlement::new(BOB, ALICE, dec(70)));
        assert_eq!(p[1], Settlement::new(DAVE, CAROL, dec(30)));
    }

    #[test]
    fn creditor_tie_breaks_by_id() {
        let s = sheet(&[(CAROL, 100), (BOB, 100), (ALICE, -200)]);
        let p = plan(&s).unwrap();
        assert_eq!(p[0], Settlement::new(ALICE, BOB, dec(100)));
        assert_eq!(p[1], Settlement::new(ALICE, CAROL, dec(100)));
    }

    #[test]
    fn fractional_amounts() {
        let s: BalanceSheet = [
            (ALICE, Decimal::new(6667, 2)),
            (BOB, Decimal::new(-3334, 2)),
            (CAROL, Decimal::new(-3333, 2)),
        ]
        .into_iter()
        .collect();
        let p = plan(&s).unwrap();
        assert_eq!(p[0], Settlement::new(BOB, ALICE, Decimal::new(3334, 2)));
        assert_eq!(p[1], Settlement::new(CAROL, ALICE, Decimal::new(3333, 2)));
    }

    #[test]
    fn imbalanced_input_refused() {
        let s = sheet(&[(ALICE, 50), (BOB, -40)]);
        assert!(matches!(
            plan(&s),
            Err(LedgerError::LedgerImbalance { .. })
        ));
    }

    #[test]
    fn plan_is_deterministic() {
        let s = sheet(&[(ALICE, 10), (BOB, 10), (CAROL, -10), (DAVE, -10)]);
        assert_eq!(plan(&s).unwrap(), plan(&s).unwrap());
    }

    #[test]
    fn party_ordering() {
        let big = Party {
            outstanding: dec(10),
            member: DAVE,
        };
        let small = Party {
            outstanding: dec(5),
            member: ALICE,
        };
        let tie_low = Party {
            outstanding: dec(10),
            member: ALICE,
        };
        assert!(big > small);
        assert!(tie_low > big, "lower id wins ties");
    }
}
