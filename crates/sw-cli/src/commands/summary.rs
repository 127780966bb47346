//! Summary command for today's and this week's spending.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use sw_core::{DashboardSummary, dashboard_summary};

use crate::Config;
use crate::commands::util::reference_date;
use crate::snapshot::Snapshot;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Summarize as of this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &SummaryArgs, config: &Config) -> Result<()> {
    let snapshot = Snapshot::load(&config.snapshot_path)?;
    let summary = dashboard_summary(
        &snapshot.transactions,
        &snapshot.budgets,
        reference_date(args.today),
    );

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    write_summary(writer, &summary)
}

fn write_summary<W: Write>(writer: &mut W, summary: &DashboardSummary) -> Result<()> {
    writeln!(writer, "Summary for {}", summary.today)?;
    writeln!(writer, "Today: {:.2}", summary.today_spend)?;

    writeln!(writer, "Last 7 days:")?;
    for day in &summary.last_seven_days {
        writeln!(writer, "- {}: {:.2}", day.date, day.amount)?;
    }

    match &summary.pace {
        Some(pace) => writeln!(
            writer,
            "This week: {:.2} of {:.2} budget ({:+}%, {})",
            summary.week_spend,
            pace.weekly_budget,
            pace.budget_difference,
            if pace.is_over_budget { "over budget" } else { "under budget" }
        )?,
        None => writeln!(writer, "This week: {:.2} (no budget set)", summary.week_spend)?,
    }

    writeln!(writer, "Saved: {:.2}", summary.saved_amount)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::commands::testing::config_with_snapshot;

    const SNAPSHOT: &str = r#"{
        "budgets": [{"category_id": "1", "limit": 310.0}],
        "transactions": [
            {"id": "t1", "date": "2026-10-15", "merchant": "KFC", "amount": 3.0,
             "category": "Food", "type": "debit"},
            {"id": "t2", "date": "2026-10-19", "merchant": "Uber", "amount": 50.0,
             "category": "Transport", "type": "debit"},
            {"id": "t3", "date": "2026-10-21", "merchant": "Zomato", "amount": 34.0,
             "category": "Food", "type": "debit"},
            {"id": "t4", "date": "2026-10-01", "merchant": "Employer", "amount": 1000.0,
             "category": "Salary", "type": "credit"}
        ]
    }"#;

    fn args(json: bool) -> SummaryArgs {
        SummaryArgs {
            today: NaiveDate::from_ymd_opt(2026, 10, 21),
            json,
        }
    }

    #[test]
    fn summary_over_weekly_budget() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_with_snapshot(temp.path(), SNAPSHOT);
        let mut output = Vec::new();

        run(&mut output, &args(false), &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Summary for 2026-10-21
        Today: 34.00
        Last 7 days:
        - 2026-10-15: 3.00
        - 2026-10-16: 0.00
        - 2026-10-17: 0.00
        - 2026-10-18: 0.00
        - 2026-10-19: 50.00
        - 2026-10-20: 0.00
        - 2026-10-21: 34.00
        This week: 84.00 of 70.00 budget (+20%, over budget)
        Saved: 913.00
        ");
    }

    #[test]
    fn summary_without_budgets() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_with_snapshot(temp.path(), "{}");
        let mut output = Vec::new();

        run(&mut output, &args(false), &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("This week: 0.00 (no budget set)\n"));
        assert!(output.ends_with("Saved: 0.00\n"));
    }

    #[test]
    fn summary_json_output() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_with_snapshot(temp.path(), SNAPSHOT);
        let mut output = Vec::new();

        run(&mut output, &args(true), &config).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["today_spend"], 34.0);
        assert_eq!(value["week_spend"], 84.0);
        assert_eq!(value["pace"]["budget_difference"], 20);
        assert_eq!(value["pace"]["is_over_budget"], true);
        assert_eq!(value["last_seven_days"].as_array().unwrap().len(), 7);
        assert_eq!(value["saved_amount"], 913.0);
    }
}
