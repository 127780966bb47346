//! Group balance computation.
//!
//! Turns a group's shared expenses into a net position per member.
//!
//! # Algorithm Summary
//!
//! 1. Every listed member starts at zero, so idle members still appear
//! 2. Each expense debits every participant an equal share of its amount
//! 3. The payer is credited the full amount
//!
//! Each expense contributes exactly zero to the sum of all balances, so a
//! sheet always totals zero up to floating-point error. Positive balances are
//! owed money; negative balances owe money.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::MemberId;

/// An expense shared between group members.
///
/// This trait allows balance computation to work with different expense
/// representations (e.g., [`SharedExpense`], or snapshot records that carry a
/// title and group).
pub trait SplitExpense {
    /// Total amount paid. Expected to be non-negative; not validated here.
    fn amount(&self) -> f64;

    /// The member who paid.
    fn payer(&self) -> &MemberId;

    /// Members the amount is split between. The payer may or may not be one.
    fn participants(&self) -> &[MemberId];
}

impl<T: SplitExpense + ?Sized> SplitExpense for &T {
    fn amount(&self) -> f64 {
        (**self).amount()
    }

    fn payer(&self) -> &MemberId {
        (**self).payer()
    }

    fn participants(&self) -> &[MemberId] {
        (**self).participants()
    }
}

/// A minimal shared expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedExpense {
    pub amount: f64,
    pub payer: MemberId,
    pub participants: Vec<MemberId>,
}

impl SharedExpense {
    pub fn new(amount: f64, payer: MemberId, participants: Vec<MemberId>) -> Self {
        Self {
            amount,
            payer,
            participants,
        }
    }
}

impl SplitExpense for SharedExpense {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn payer(&self) -> &MemberId {
        &self.payer
    }

    fn participants(&self) -> &[MemberId] {
        &self.participants
    }
}

/// Net balance per member at the time of computation.
///
/// Iteration is ordered by member ID. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BalanceSheet {
    balances: BTreeMap<MemberId, f64>,
}

impl BalanceSheet {
    /// Returns a member's balance, or `None` if the member never appeared.
    pub fn get(&self, member: &str) -> Option<f64> {
        self.balances.get(member).copied()
    }

    /// Iterates over `(member, balance)` pairs ordered by member ID.
    pub fn iter(&self) -> impl Iterator<Item = (&MemberId, f64)> {
        self.balances.iter().map(|(id, balance)| (id, *balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Sum of all balances. Zero within floating-point tolerance.
    pub fn total(&self) -> f64 {
        self.balances.values().sum()
    }

    fn adjust(&mut self, member: &MemberId, delta: f64) {
        *self.balances.entry(member.clone()).or_insert(0.0) += delta;
    }
}

/// Compute net balances for a group.
///
/// Expenses with no participants are skipped. Members referenced by an
/// expense but missing from `member_ids` (including a payer who left the
/// group) get an entry of their own.
///
/// No rounding is applied; formatting and "settled" tolerance belong to the
/// caller.
pub fn compute_balances<E: SplitExpense>(member_ids: &[MemberId], expenses: &[E]) -> BalanceSheet {
    let mut sheet = BalanceSheet::default();
    for member in member_ids {
        sheet.adjust(member, 0.0);
    }

    for expense in expenses {
        let participants = expense.participants();
        if participants.is_empty() {
            tracing::debug!(
                payer = %expense.payer(),
                amount = expense.amount(),
                "skipping expense with no participants"
            );
            continue;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "participant counts are far below 2^52"
        )]
        let share = expense.amount() / participants.len() as f64;

        for participant in participants {
            sheet.adjust(participant, -share);
        }
        sheet.adjust(expense.payer(), expense.amount());
    }

    sheet
}
