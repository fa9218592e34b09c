//! Group summary: the data behind the group dashboard and balance screen.
//!
//! Combines aggregation and planning with the roster's display names, and
//! adds the headline figures (total spent, per-person average) and each
//! member's paid / consumed split.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use splitledger_ledger::{aggregate, shares};
use splitledger_types::{
    Expense, LedgerConfig, LedgerError, Member, MemberId, Result, Settlement, money,
};

use crate::planner::plan;

/// Where a member stands overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Positive balance: will receive money.
    Receive,
    /// Negative balance: owes money.
    Owe,
    /// Exactly zero.
    Settled,
}

impl BalanceStatus {
    #[must_use]
    pub fn of(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            Self::Receive
        } else if balance < Decimal::ZERO {
            Self::Owe
        } else {
            Self::Settled
        }
    }
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Receive => write!(f, "RECEIVE"),
            Self::Owe => write!(f, "OWE"),
            Self::Settled => write!(f, "SETTLED"),
        }
    }
}

/// One roster member's line on the balance screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLine {
    pub member_id: MemberId,
    pub display_name: String,
    /// Total this member paid out.
    pub paid: Decimal,
    /// Total of this member's own shares.
    pub consumed: Decimal,
    /// `paid - consumed`.
    pub balance: Decimal,
    pub status: BalanceStatus,
}

/// A planned settlement with both parties' display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    #[serde(flatten)]
    pub settlement: Settlement,
    pub from_name: String,
    pub to_name: String,
}

/// Everything the group dashboard and balance screen display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub member_count: usize,
    pub expense_count: usize,
    /// Sum of all expense amounts.
    pub total_expense: Decimal,
    /// `total_expense / member_count`, rounded to the minor unit.
    pub per_person_average: Decimal,
    /// One line per roster member, in roster order.
    pub members: Vec<MemberLine>,
    /// Suggested settlements, in execution order.
    pub settlements: Vec<SettlementLine>,
}

impl GroupSummary {
    /// Line for `member`, if on the roster.
    #[must_use]
    pub fn line(&self, member: &MemberId) -> Option<&MemberLine> {
        self.members.iter().find(|l| l.member_id == *member)
    }

    /// Whether nobody owes anything.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}

/// Build the group summary for `members` and `expenses`.
///
/// Fails when aggregation or planning would fail, or with
/// [`LedgerError::InvalidAmount`] when a headline total overflows.
pub fn summarize(
    members: &[Member],
    expenses: &[Expense],
    config: &LedgerConfig,
) -> Result<GroupSummary> {
    let balances = aggregate(members, expenses, config)?;
    let settlements = plan(&balances)?;

    let mut paid: BTreeMap<MemberId, Decimal> = BTreeMap::new();
    let mut consumed: BTreeMap<MemberId, Decimal> = BTreeMap::new();
    let mut total_expense = Decimal::ZERO;
    for expense in expenses {
        total_expense = money::checked_add(total_expense, expense.amount, "total expense")?;
        accumulate(&mut paid, expense.payer, expense.amount, "amount paid")?;
        for (member, share) in shares(expense, config)? {
            accumulate(&mut consumed, member, share, "amount consumed")?;
        }
    }

    let per_person_average = if members.is_empty() {
        Decimal::ZERO
    } else {
        (total_expense / Decimal::from(members.len()))
            .round_dp_with_strategy(config.minor_unit_scale, RoundingStrategy::MidpointNearestEven)
    };

    let lines = members
        .iter()
        .map(|member| {
            let balance = balances.balance_of(&member.id);
            MemberLine {
                member_id: member.id,
                display_name: member.display_name.clone(),
                paid: paid.get(&member.id).copied().unwrap_or(Decimal::ZERO),
                consumed: consumed.get(&member.id).copied().unwrap_or(Decimal::ZERO),
                balance,
                status: BalanceStatus::of(balance),
            }
        })
        .collect();

    let names: HashMap<MemberId, &str> = members
        .iter()
        .map(|m| (m.id, m.display_name.as_str()))
        .collect();
    let name_of = |id: &MemberId| -> Result<String> {
        names
            .get(id)
            .map(|n| (*n).to_string())
            .ok_or(LedgerError::UnknownMember(*id))
    };
    let settlement_lines = settlements
        .into_iter()
        .map(|settlement| {
            Ok(SettlementLine {
                from_name: name_of(&settlement.from)?,
                to_name: name_of(&settlement.to)?,
                settlement,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GroupSummary {
        member_count: members.len(),
        expense_count: expenses.len(),
        total_expense,
        per_person_average,
        members: lines,
        settlements: settlement_lines,
    })
}

fn accumulate(
    totals: &mut BTreeMap<MemberId, Decimal>,
    member: MemberId,
    amount: Decimal,
    what: &str,
) -> Result<()> {
    let total = totals.entry(member).or_insert(Decimal::ZERO);
    *total = money::checked_add(*total, amount, what)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: MemberId = MemberId::from_u128(1);
    const BOB: MemberId = MemberId::from_u128(2);
    const CAROL: MemberId = MemberId::from_u128(3);

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn roster() -> Vec<Member> {
        vec![
            Member::named(1, "Alice"),
            Member::named(2, "Bob"),
            Member::named(3, "Carol"),
        ]
    }

    #[test]
    fn status_from_sign() {
        assert_eq!(BalanceStatus::of(dec(5)), BalanceStatus::Receive);
        assert_eq!(BalanceStatus::of(dec(-5)), BalanceStatus::Owe);
        assert_eq!(BalanceStatus::of(Decimal::ZERO), BalanceStatus::Settled);
    }

    #[test]
    fn summary_of_one_expense() {
        let expenses = vec![Expense::equal(ALICE, dec(300), &[ALICE, BOB, CAROL])];
        let summary = summarize(&roster(), &expenses, &LedgerConfig::default()).unwrap();

        assert_eq!(summary.member_count, 3);
        assert_eq!(summary.expense_count, 1);
        assert_eq!(summary.total_expense, dec(300));
        assert_eq!(summary.per_person_average, dec(100));

        let alice = summary.line(&ALICE).unwrap();
        assert_eq!(alice.display_name, "Alice");
        assert_eq!(alice.paid, dec(300));
        assert_eq!(alice.consumed, dec(100));
        assert_eq!(alice.balance, dec(200));
        assert_eq!(alice.status, BalanceStatus::Receive);

        let bob = summary.line(&BOB).unwrap();
        assert_eq!(bob.paid, Decimal::ZERO);
        assert_eq!(bob.status, BalanceStatus::Owe);

        assert_eq!(summary.settlements.len(), 2);
        assert_eq!(summary.settlements[0].from_name, "Bob");
        assert_eq!(summary.settlements[0].to_name, "Alice");
        assert_eq!(summary.settlements[1].from_name, "Carol");
    }

    #[test]
    fn empty_group() {
        let summary = summarize(&[], &[], &LedgerConfig::default()).unwrap();
        assert_eq!(summary.per_person_average, Decimal::ZERO);
        assert!(summary.is_settled());
    }

    #[test]
    fn average_rounds_to_minor_unit() {
        let expenses = vec![Expense::equal(ALICE, dec(100), &[ALICE, BOB, CAROL])];
        let summary = summarize(&roster(), &expenses, &LedgerConfig::default()).unwrap();
        assert_eq!(summary.per_person_average, Decimal::new(3333, 2));
    }

    #[test]
    fn member_lines_follow_roster_order() {
        let members = vec![
            Member::named(3, "Carol"),
            Member::named(1, "Alice"),
            Member::named(2, "Bob"),
        ];
        let summary = summarize(&members, &[], &LedgerConfig::default()).unwrap();
        let names: Vec<&str> = summary
            .members
            .iter()
            .map(|l| l.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
        assert!(summary
            .members
            .iter()
            .all(|l| l.status == BalanceStatus::Settled));
    }

    #[test]
    fn paid_minus_consumed_is_balance() {
        let expenses = vec![
            Expense::equal(ALICE, dec(300), &[ALICE, BOB, CAROL]),
            Expense::custom(
                BOB,
                dec(100),
                &[(ALICE, dec(40)), (BOB, dec(30)), (CAROL, dec(30))],
            ),
        ];
        let summary = summarize(&roster(), &expenses, &LedgerConfig::default()).unwrap();
        for line in &summary.members {
            assert_eq!(line.paid - line.consumed, line.balance, "{}", line.display_name);
        }
    }

    #[test]
    fn total_expense_overflow_is_typed_error() {
        // payers alternate, so balances stay small while the total keeps growing
        let huge = Decimal::from_i128_with_scale(5 * 10_i128.pow(26), 0);
        let expenses: Vec<Expense> = (0..200)
            .map(|i| {
                let payer = if i % 2 == 0 { ALICE } else { BOB };
                Expense::equal(payer, huge, &[ALICE, BOB])
            })
            .collect();
        let config = LedgerConfig::default();
        assert!(aggregate(&roster(), &expenses, &config).is_ok());
        match summarize(&roster(), &expenses, &config) {
            Err(LedgerError::InvalidAmount { reason, .. }) => {
                assert!(reason.contains("total expense"), "reason: {reason}");
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn summary_serializes_status_snake_case() {
        let expenses = vec![Expense::equal(ALICE, dec(300), &[ALICE, BOB, CAROL])];
        let summary = summarize(&roster(), &expenses, &LedgerConfig::default()).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""status":"receive""#));
        assert!(json.contains(r#""status":"owe""#));
        assert!(json.contains(r#""from_name":"Bob""#));
    }
}
