//! Budget threshold evaluation.
//!
//! Picks the single budget alert worth surfacing right now. The evaluator is
//! stateless: callers own the set of dismissed category names and pass it in
//! on every call.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, ValidationError};

/// Spend/limit ratio at or above which a budget becomes an alert candidate.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Name given to budgets whose category record is missing or whose limit is unset.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Total debit spend keyed by category ID.
pub type SpendByCategory = HashMap<CategoryId, f64>;

/// A monthly limit for one category, with its resolved display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub category_id: CategoryId,
    pub category_name: String,
    pub limit: f64,
}

/// A raw per-user budget entry, before category names are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLimit {
    pub category_id: CategoryId,
    pub limit: f64,
}

/// A category record as far as budgets are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// The budget selected for alerting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlert {
    pub category_name: String,
    pub limit: f64,
    pub spent: f64,
}

impl BudgetAlert {
    /// Fraction of the limit already spent.
    pub fn ratio(&self) -> f64 {
        self.spent / self.limit
    }

    /// Whole-number percentage of the limit spent, capped at 100.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is rounded and clamped to 0..=100 first"
    )]
    pub fn percent_used(&self) -> u8 {
        (self.ratio() * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Checks that a threshold lies in (0, 1].
pub fn validate_threshold(threshold: f64) -> Result<f64, ValidationError> {
    if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
        return Err(ValidationError::ThresholdOutOfRange { value: threshold });
    }
    Ok(threshold)
}

/// Find the budget alert to surface, if any.
///
/// A budget qualifies when its limit is positive, `spent / limit >= threshold`
/// and its category name is not dismissed. Categories absent from `spend`
/// have spent nothing. The first qualifying budget in input order is
/// returned; budgets further down the list are not compared by overage.
pub fn find_alert_candidate(
    budgets: &[CategoryBudget],
    spend: &SpendByCategory,
    dismissed: &HashSet<String>,
    threshold: f64,
) -> Option<BudgetAlert> {
    budgets
        .iter()
        .filter(|budget| budget.limit > 0.0)
        .find_map(|budget| {
            let spent = spend.get(&budget.category_id).copied().unwrap_or(0.0);
            let ratio = spent / budget.limit;
            if ratio >= threshold && !dismissed.contains(&budget.category_name) {
                Some(BudgetAlert {
                    category_name: budget.category_name.clone(),
                    limit: budget.limit,
                    spent,
                })
            } else {
                None
            }
        })
}

/// Attach category names to raw budget limits, keeping limit order.
///
/// Limits that point at a missing category, or that are not positive, are
/// named [`UNKNOWN_CATEGORY`].
pub fn resolve_budgets(limits: &[BudgetLimit], categories: &[Category]) -> Vec<CategoryBudget> {
    limits
        .iter()
        .map(|entry| {
            let category = categories.iter().find(|c| c.id == entry.category_id);
            let category_name = match category {
                Some(category) if entry.limit > 0.0 => category.name.clone(),
                _ => {
                    tracing::debug!(
                        category_id = %entry.category_id,
                        limit = entry.limit,
                        "unresolved budget"
                    );
                    UNKNOWN_CATEGORY.to_string()
                }
            };
            CategoryBudget {
                category_id: entry.category_id.clone(),
                category_name,
                limit: entry.limit,
            }
        })
        .collect()
}
