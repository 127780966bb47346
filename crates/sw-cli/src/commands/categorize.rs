//! Categorize command for suggesting a category from merchant text.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::Config;
use crate::snapshot::Snapshot;

#[derive(Debug, Args)]
pub struct CategorizeArgs {
    /// Merchant name or description to categorize.
    pub merchant: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Suggestion<'a> {
    merchant: &'a str,
    category: String,
}

pub fn run<W: Write>(writer: &mut W, args: &CategorizeArgs, config: &Config) -> Result<()> {
    let snapshot = Snapshot::load(&config.snapshot_path)?;
    let category = sw_core::categorize(args.merchant.trim(), &snapshot.category_names());
    tracing::debug!(merchant = %args.merchant, %category, "categorized");

    if args.json {
        let suggestion = Suggestion {
            merchant: &args.merchant,
            category,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&suggestion)?)?;
        return Ok(());
    }

    writeln!(writer, "{category}")?;
    Ok(())
}
