//! Status command for showing what the snapshot contains.

use std::io::Write;

use anyhow::Result;

use crate::Config;
use crate::snapshot::Snapshot;

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    writeln!(writer, "Snapshot: {}", config.snapshot_path.display())?;
    if !config.snapshot_path.exists() {
        writeln!(writer, "No snapshot found.")?;
        return Ok(());
    }

    let snapshot = Snapshot::load(&config.snapshot_path)?;
    writeln!(writer, "Categories: {}", snapshot.categories.len())?;
    writeln!(writer, "Transactions: {}", snapshot.transactions.len())?;
    writeln!(writer, "Budgets: {}", snapshot.budgets.len())?;
    writeln!(writer, "Groups: {}", snapshot.groups.len())?;
    writeln!(writer, "Group expenses: {}", snapshot.group_expenses.len())?;
    writeln!(writer, "Budget threshold: {}", config.budget_threshold)?;
    Ok(())
}
