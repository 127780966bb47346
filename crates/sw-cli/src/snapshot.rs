//! Snapshot of already-fetched records, read from a JSON file.
//!
//! The hosted backend is not reachable from here; whatever exported the
//! records is responsible for their consistency. Every top-level key is
//! optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use sw_core::{BudgetLimit, Category, MemberId, SplitExpense, Transaction};

/// All records the CLI knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<BudgetLimit>,
    pub groups: Vec<Group>,
    pub group_expenses: Vec<GroupExpense>,
}

/// A named set of members sharing expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub member_ids: Vec<MemberId>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// Display details for a group member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub uid: MemberId,
    pub display_name: String,
}

/// An expense recorded against a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupExpense {
    pub id: String,
    pub group_id: String,
    pub title: String,
    pub amount: f64,
    pub paid_by: MemberId,
    #[serde(default)]
    pub split_between: Vec<MemberId>,
}

impl SplitExpense for GroupExpense {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn payer(&self) -> &MemberId {
        &self.paid_by
    }

    fn participants(&self) -> &[MemberId] {
        &self.split_between
    }
}

impl Group {
    /// Display name for a member, falling back to the raw ID.
    pub fn display_name<'a>(&'a self, member: &'a MemberId) -> &'a str {
        self.members
            .iter()
            .find(|m| &m.uid == member)
            .map_or(member.as_str(), |m| m.display_name.as_str())
    }
}

impl Snapshot {
    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            transactions = snapshot.transactions.len(),
            groups = snapshot.groups.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Expenses recorded against a group, in snapshot order.
    pub fn expenses_for(&self, group_id: &str) -> Vec<&GroupExpense> {
        self.group_expenses
            .iter()
            .filter(|e| e.group_id == group_id)
            .collect()
    }

    /// Category names in snapshot order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}
