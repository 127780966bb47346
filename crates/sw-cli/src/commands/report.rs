//! Report command for monthly spending analytics.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use sw_core::{MonthlyInsights, monthly_insights};

use crate::Config;
use crate::commands::util::{format_month, reference_date};
use crate::snapshot::Snapshot;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report on the month containing this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &ReportArgs, config: &Config) -> Result<()> {
    let snapshot = Snapshot::load(&config.snapshot_path)?;
    let insights = monthly_insights(&snapshot.transactions, reference_date(args.today));

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&insights)?)?;
        return Ok(());
    }

    write_report(writer, &insights)
}

fn write_report<W: Write>(writer: &mut W, insights: &MonthlyInsights) -> Result<()> {
    writeln!(
        writer,
        "Report for {}",
        format_month(insights.year, insights.month)
    )?;
    writeln!(writer, "Spent: {:.2}", insights.total_spent)?;
    writeln!(
        writer,
        "Last month: {:.2} ({:+}%)",
        insights.total_spent_last_month, insights.spending_change
    )?;
    writeln!(writer, "Income: {:.2}", insights.total_income)?;
    writeln!(writer, "Net balance: {:.2}", insights.net_balance)?;
    writeln!(writer, "Average per day: {:.2}", insights.avg_daily_spend)?;
    match &insights.top_category {
        Some(top) => writeln!(writer, "Top category: {} ({:.2})", top.category, top.amount)?,
        None => writeln!(writer, "Top category: none")?,
    }

    if !insights.distribution.is_empty() {
        writeln!(writer, "Distribution:")?;
        for share in &insights.distribution {
            writeln!(writer, "- {}: {}%", share.category, share.percent)?;
        }
    }

    writeln!(writer, "Trend:")?;
    for month in &insights.trend {
        writeln!(
            writer,
            "- {}: {:.2}",
            format_month(month.year, month.month),
            month.amount
        )?;
    }

    Ok(())
}
