//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::alerts::AlertsArgs;
use crate::commands::balances::BalancesArgs;
use crate::commands::categorize::CategorizeArgs;
use crate::commands::report::ReportArgs;
use crate::commands::summary::SummaryArgs;

/// Personal and group expense tracker.
///
/// Reads a snapshot of transactions, budgets and group expenses, and reports
/// balances, budget alerts and monthly analytics.
#[derive(Debug, Parser)]
#[command(name = "sw", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the snapshot file, overriding the configured one.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show net balances for a group.
    Balances(BalancesArgs),

    /// List budgets at or over the alert threshold.
    Alerts(AlertsArgs),

    /// Suggest a category for a merchant.
    Categorize(CategorizeArgs),

    /// Show monthly spending analytics.
    Report(ReportArgs),

    /// Show today's and this week's spending against budget.
    Summary(SummaryArgs),

    /// Show snapshot location and record counts.
    Status,
}
