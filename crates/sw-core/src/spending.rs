//! Spending aggregation over personal transactions.
//!
//! Produces the per-category spend the budget evaluator consumes, the
//! month-over-month figures shown on the analytics view, and the dashboard's
//! daily and weekly figures.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetLimit, Category, SpendByCategory};
use crate::types::TransactionKind;

/// Number of months covered by [`MonthlyInsights::trend`].
pub const TREND_MONTHS: u32 = 6;

/// Number of days covered by [`DashboardSummary::last_seven_days`].
pub const RECENT_DAYS: u64 = 7;

/// A personal transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub merchant: String,
    pub amount: f64,
    /// Category name, not ID.
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    /// Whether the transaction falls in the given calendar month (1-12).
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// Sum debit spend per category.
///
/// Transactions are matched to categories by name. Categories without any
/// debit are left out of the result.
pub fn spend_by_category(transactions: &[Transaction], categories: &[Category]) -> SpendByCategory {
    let mut spend = SpendByCategory::new();
    for category in categories {
        let mut debits = transactions
            .iter()
            .filter(|t| t.is_debit() && t.category == category.name)
            .map(|t| t.amount)
            .peekable();
        if debits.peek().is_some() {
            spend.insert(category.id.clone(), debits.sum());
        }
    }
    spend
}

/// Share of a month's spend that went to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    /// Rounded percentage of the month's total.
    pub percent: u32,
}

/// Debit total for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub amount: f64,
}

/// Category with the highest spend this month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCategory {
    pub category: String,
    pub amount: f64,
}

/// Month-to-date analytics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyInsights {
    pub year: i32,
    pub month: u32,
    pub total_spent: f64,
    pub total_spent_last_month: f64,
    pub total_income: f64,
    pub net_balance: f64,
    /// Rounded percent change in spend vs last month.
    pub spending_change: i64,
    pub top_category: Option<TopCategory>,
    pub avg_daily_spend: f64,
    pub distribution: Vec<CategoryShare>,
    /// Oldest month first, ending with the current month.
    pub trend: Vec<MonthTotal>,
}

/// Compute analytics for the calendar month containing `today`.
pub fn monthly_insights(transactions: &[Transaction], today: NaiveDate) -> MonthlyInsights {
    let (year, month) = (today.year(), today.month());
    let last = month_start(today) - Months::new(1);

    let mut total_spent = 0.0;
    let mut total_spent_last_month = 0.0;
    let mut total_income = 0.0;
    // First-seen order is kept for the distribution and top-category tie-break.
    let mut category_totals: Vec<(String, f64)> = Vec::new();

    for t in transactions {
        let this_month = t.in_month(year, month);
        match t.kind {
            TransactionKind::Debit if this_month => {
                total_spent += t.amount;
                match category_totals.iter_mut().find(|(name, _)| *name == t.category) {
                    Some((_, total)) => *total += t.amount,
                    None => category_totals.push((t.category.clone(), t.amount)),
                }
            }
            TransactionKind::Debit if t.in_month(last.year(), last.month()) => {
                total_spent_last_month += t.amount;
            }
            TransactionKind::Credit if this_month => total_income += t.amount,
            _ => {}
        }
    }

    let top_category = if total_spent > 0.0 {
        category_totals
            .iter()
            .fold(None::<&(String, f64)>, |best, entry| match best {
                Some(best) if best.1 > entry.1 => Some(best),
                _ => Some(entry),
            })
            .map(|(category, amount)| TopCategory {
                category: category.clone(),
                amount: *amount,
            })
    } else {
        None
    };

    let avg_daily_spend = if total_spent > 0.0 {
        total_spent / f64::from(days_in_month(today))
    } else {
        0.0
    };

    let distribution = if total_spent > 0.0 {
        category_totals
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: category.clone(),
                percent: rounded_percent(*amount, total_spent),
            })
            .filter(|share| share.percent > 0)
            .collect()
    } else {
        Vec::new()
    };

    MonthlyInsights {
        year,
        month,
        total_spent,
        total_spent_last_month,
        total_income,
        net_balance: total_income - total_spent,
        spending_change: spending_change(total_spent, total_spent_last_month),
        top_category,
        avg_daily_spend,
        distribution,
        trend: monthly_trend(transactions, today),
    }
}

/// Debit totals for the [`TREND_MONTHS`] months ending with `today`'s month.
pub fn monthly_trend(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthTotal> {
    let current = month_start(today);
    (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            let start = current - Months::new(back);
            let amount = transactions
                .iter()
                .filter(|t| t.is_debit() && t.in_month(start.year(), start.month()))
                .map(|t| t.amount)
                .sum();
            MonthTotal {
                year: start.year(),
                month: start.month(),
                amount,
            }
        })
        .collect()
}

/// Rounded percent change from `previous` to `current`.
///
/// Any spend after a month with none counts as a 100% increase.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded percentage of realistic amounts fits in i64"
)]
fn spending_change(current: f64, previous: f64) -> i64 {
    if previous > 0.0 {
        (((current - previous) / previous) * 100.0).round() as i64
    } else if current > 0.0 {
        100
    } else {
        0
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "part is a non-negative share of total"
)]
fn rounded_percent(part: f64, total: f64) -> u32 {
    ((part / total) * 100.0).round().max(0.0) as u32
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(date: NaiveDate) -> u32 {
    let start = month_start(date);
    let next = start + Months::new(1);
    u32::try_from((next - start).num_days()).unwrap_or(30)
}

/// Debit total for a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySpend {
    pub date: NaiveDate,
    pub amount: f64,
}

/// This week's spend measured against a weekly slice of the monthly budgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPace {
    /// Sum of monthly limits, spread over the month's days, times seven.
    pub weekly_budget: f64,
    /// Rounded percent above (positive) or below (negative) the weekly budget.
    pub budget_difference: i64,
    pub is_over_budget: bool,
}

/// At-a-glance figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub today_spend: f64,
    /// Oldest day first, ending with `today`.
    pub last_seven_days: Vec<DailySpend>,
    /// Debits from Monday through Sunday of the current week.
    pub week_spend: f64,
    /// `None` when the weekly budget is not positive.
    pub pace: Option<WeeklyPace>,
    /// All credits minus all debits.
    pub saved_amount: f64,
}

/// Compute dashboard figures as of `today`.
///
/// Weeks start on Monday. The weekly budget is the sum of all monthly
/// limits divided by the days in `today`'s month, times seven.
pub fn dashboard_summary(
    transactions: &[Transaction],
    limits: &[BudgetLimit],
    today: NaiveDate,
) -> DashboardSummary {
    let debits_between = |start: NaiveDate, end: NaiveDate| -> f64 {
        transactions
            .iter()
            .filter(|t| t.is_debit() && t.date >= start && t.date <= end)
            .map(|t| t.amount)
            .sum()
    };

    let last_seven_days = (0..RECENT_DAYS)
        .rev()
        .map(|back| {
            let date = today - Days::new(back);
            DailySpend {
                date,
                amount: debits_between(date, date),
            }
        })
        .collect();

    let week_start = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    let week_end = week_start + Days::new(6);
    let week_spend = debits_between(week_start, week_end);

    let monthly_budget: f64 = limits.iter().map(|l| l.limit).sum();
    let weekly_budget = monthly_budget / f64::from(days_in_month(today)) * 7.0;
    let pace = (weekly_budget > 0.0).then(|| WeeklyPace {
        weekly_budget,
        budget_difference: spending_change(week_spend, weekly_budget),
        is_over_budget: week_spend > weekly_budget,
    });

    let saved_amount = transactions
        .iter()
        .map(|t| match t.kind {
            TransactionKind::Credit => t.amount,
            TransactionKind::Debit => -t.amount,
        })
        .sum();

    DashboardSummary {
        today,
        today_spend: debits_between(today, today),
        last_seven_days,
        week_spend,
        pace,
        saved_amount,
    }
}
