//! Core domain logic for spendwise.
//!
//! This crate contains the pure computations behind the expense tracker:
//! - Balances: net positions for members of a shared-expense group
//! - Budgets: picking the budget alert to surface for a threshold
//! - Categorization: keyword rules for merchant names
//! - Spending: per-category totals, monthly analytics and dashboard figures
//!
//! Nothing here performs I/O. Callers load records, pass them in, and render
//! the results.

pub mod balance;
pub mod budget;
pub mod categorize;
pub mod spending;
pub mod types;

pub use balance::{BalanceSheet, SharedExpense, SplitExpense, compute_balances};
pub use budget::{
    BudgetAlert, BudgetLimit, Category, CategoryBudget, DEFAULT_THRESHOLD, SpendByCategory,
    find_alert_candidate, resolve_budgets, validate_threshold,
};
pub use categorize::categorize;
pub use spending::{
    DashboardSummary, MonthlyInsights, Transaction, dashboard_summary, monthly_insights,
    spend_by_category,
};
pub use types::{CategoryId, MemberId, TransactionKind, ValidationError};
