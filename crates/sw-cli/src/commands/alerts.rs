//! Alerts command for budgets nearing their limit.
//!
//! Replays one alerting session: the evaluator is asked for a candidate, the
//! candidate is reported and dismissed, and the evaluator is asked again
//! until nothing is left. This lists the alerts in the order a user would
//! see them.

use std::collections::HashSet;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Args;
use serde::Serialize;

use sw_core::{
    BudgetAlert, Transaction, find_alert_candidate, resolve_budgets, spend_by_category,
    validate_threshold,
};

use crate::Config;
use crate::commands::util::{format_month, reference_date};
use crate::snapshot::Snapshot;

#[derive(Debug, Args)]
pub struct AlertsArgs {
    /// Category name already dismissed this session (repeatable).
    #[arg(long = "dismiss", value_name = "CATEGORY")]
    pub dismissed: Vec<String>,

    /// Evaluate spend for the month containing this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AlertEntry<'a> {
    #[serde(flatten)]
    alert: &'a BudgetAlert,
    percent_used: u8,
}

#[derive(Debug, Serialize)]
struct AlertsOutput<'a> {
    month: String,
    threshold: f64,
    alerts: Vec<AlertEntry<'a>>,
}

/// Collect every alert of a session, dismissing each one as it is shown.
pub fn session_alerts(
    snapshot: &Snapshot,
    month_of: NaiveDate,
    mut dismissed: HashSet<String>,
    threshold: f64,
) -> Vec<BudgetAlert> {
    let this_month: Vec<Transaction> = snapshot
        .transactions
        .iter()
        .filter(|t| t.in_month(month_of.year(), month_of.month()))
        .cloned()
        .collect();
    let spend = spend_by_category(&this_month, &snapshot.categories);
    let budgets = resolve_budgets(&snapshot.budgets, &snapshot.categories);

    let mut alerts = Vec::new();
    while let Some(alert) = find_alert_candidate(&budgets, &spend, &dismissed, threshold) {
        tracing::debug!(category = %alert.category_name, "budget alert");
        dismissed.insert(alert.category_name.clone());
        alerts.push(alert);
    }
    alerts
}

pub fn run<W: Write>(writer: &mut W, args: &AlertsArgs, config: &Config) -> Result<()> {
    let threshold =
        validate_threshold(config.budget_threshold).context("invalid budget_threshold")?;
    let snapshot = Snapshot::load(&config.snapshot_path)?;
    let today = reference_date(args.today);
    let month = format_month(today.year(), today.month());

    let dismissed: HashSet<String> = args.dismissed.iter().cloned().collect();
    let alerts = session_alerts(&snapshot, today, dismissed, threshold);
    tracing::info!(%month, alerts = alerts.len(), "evaluated budgets");

    if args.json {
        let output = AlertsOutput {
            month,
            threshold,
            alerts: alerts
                .iter()
                .map(|alert| AlertEntry {
                    alert,
                    percent_used: alert.percent_used(),
                })
                .collect(),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    writeln!(
        writer,
        "Budget alerts for {month} (threshold {:.0}%)",
        threshold * 100.0
    )?;
    if alerts.is_empty() {
        writeln!(writer, "No budgets over threshold.")?;
        return Ok(());
    }
    for alert in &alerts {
        writeln!(
            writer,
            "- {}: spent {:.2} of {:.2} ({}%)",
            alert.category_name,
            alert.spent,
            alert.limit,
            alert.percent_used()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::commands::testing::config_with_snapshot;

    const SNAPSHOT: &str = r#"{
        "categories": [
            {"id": "1", "name": "Food"},
            {"id": "2", "name": "Rent"},
            {"id": "3", "name": "Fuel"}
        ],
        "budgets": [
            {"category_id": "1", "limit": 100.0},
            {"category_id": "9", "limit": 50.0},
            {"category_id": "2", "limit": 1000.0},
            {"category_id": "3", "limit": 200.0}
        ],
        "transactions": [
            {"id": "t1", "date": "2026-10-02", "merchant": "KFC", "amount": 60.0,
             "category": "Food", "type": "debit"},
            {"id": "t2", "date": "2026-10-09", "merchant": "Restaurant", "amount": 25.0,
             "category": "Food", "type": "debit"},
            {"id": "t3", "date": "2026-10-01", "merchant": "Landlord", "amount": 1200.0,
             "category": "Rent", "type": "debit"},
            {"id": "t4", "date": "2026-09-20", "merchant": "Petrol", "amount": 500.0,
             "category": "Fuel", "type": "debit"},
            {"id": "t5", "date": "2026-10-05", "merchant": "Refund", "amount": 80.0,
             "category": "Fuel", "type": "credit"}
        ]
    }"#;

    fn args(dismissed: &[&str], json: bool) -> AlertsArgs {
        AlertsArgs {
            dismissed: dismissed.iter().map(ToString::to_string).collect(),
            today: NaiveDate::from_ymd_opt(2026, 10, 19),
            json,
        }
    }

    #[test]
    fn alerts_lists_session_in_budget_order() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_with_snapshot(temp.path(), SNAPSHOT);
        let mut output = Vec::new();

        run(&mut output, &args(&[], false), &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Budget alerts for 2026-10 (threshold 80%)
        - Food: spent 85.00 of 100.00 (85%)
        - Rent: spent 1200.00 of 1000.00 (100%)
        ");
    }

    #[test]
    fn alerts_skip_dismissed_categories() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_with_snapshot(temp.path(), SNAPSHOT);
        let mut output = Vec::new();

        run(&mut output, &args(&["Food"], false), &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Budget alerts for 2026-10 (threshold 80%)
        - Rent: spent 1200.00 of 1000.00 (100%)
        ");
    }

    #[test]
    fn alerts_use_configured_threshold() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = config_with_snapshot(temp.path(), SNAPSHOT);
        config.budget_threshold = 0.9;
        let mut output = Vec::new();

        run(&mut output, &args(&["Rent"], false), &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Budget alerts for 2026-10 (threshold 90%)
        No budgets over threshold.
        ");
    }

    #[test]
    fn alerts_only_count_the_selected_month() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_with_snapshot(temp.path(), SNAPSHOT);
        let snapshot = Snapshot::load(&config.snapshot_path).unwrap();

        let september = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let alerts = session_alerts(&snapshot, september, HashSet::new(), 0.8);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category_name, "Fuel");
    }

    #[test]
    fn alerts_json_output() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_with_snapshot(temp.path(), SNAPSHOT);
        let mut output = Vec::new();

        run(&mut output, &args(&[], true), &config).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["month"], "2026-10");
        let alerts = value["alerts"].as_array().unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0]["category_name"], "Food");
        assert_eq!(alerts[0]["percent_used"], 85);
        assert_eq!(alerts[1]["percent_used"], 100);
    }

    #[test]
    fn alerts_reject_out_of_range_threshold() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = config_with_snapshot(temp.path(), SNAPSHOT);
        config.budget_threshold = 1.5;
        let mut output = Vec::new();

        let err = run(&mut output, &args(&[], false), &config).unwrap_err();
        assert_eq!(err.to_string(), "invalid budget_threshold");
    }
}
