//! Balances command for showing who owes whom within a group.

use std::io::Write;

use anyhow::{Result, anyhow};
use clap::Args;
use serde::Serialize;

use sw_core::{MemberId, compute_balances};

use crate::Config;
use crate::snapshot::Snapshot;

#[derive(Debug, Args)]
pub struct BalancesArgs {
    /// Group ID to compute balances for.
    pub group_id: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// How a member stands once balances are rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Settled,
    GetsBack,
    HasToPay,
}

impl Standing {
    /// Classify a balance; anything within `tolerance` of zero is settled.
    pub fn classify(balance: f64, tolerance: f64) -> Self {
        if balance.abs() < tolerance {
            Self::Settled
        } else if balance > 0.0 {
            Self::GetsBack
        } else {
            Self::HasToPay
        }
    }
}

#[derive(Debug, Serialize)]
struct MemberBalance<'a> {
    member: &'a str,
    name: &'a str,
    balance: f64,
    standing: Standing,
}

#[derive(Debug, Serialize)]
struct BalancesOutput<'a> {
    group_id: &'a str,
    group_name: &'a str,
    balances: Vec<MemberBalance<'a>>,
}

pub fn run<W: Write>(writer: &mut W, args: &BalancesArgs, config: &Config) -> Result<()> {
    let snapshot = Snapshot::load(&config.snapshot_path)?;
    let group = snapshot
        .group(&args.group_id)
        .ok_or_else(|| anyhow!("group not found: {}", args.group_id))?;
    let expenses = snapshot.expenses_for(&group.id);
    let sheet = compute_balances(&group.member_ids, &expenses);
    tracing::info!(
        group = %group.id,
        expenses = expenses.len(),
        members = sheet.len(),
        "computed balances"
    );

    // Group members first in their listed order, then anyone else who shows
    // up in an expense (e.g. a payer who has left the group).
    let mut ordered: Vec<&MemberId> = group.member_ids.iter().collect();
    for (member, _) in sheet.iter() {
        if !ordered.contains(&member) {
            ordered.push(member);
        }
    }

    let balances: Vec<MemberBalance<'_>> = ordered
        .into_iter()
        .map(|member| {
            let balance = sheet.get(member.as_str()).unwrap_or(0.0);
            MemberBalance {
                member: member.as_str(),
                name: group.display_name(member),
                balance,
                standing: Standing::classify(balance, config.settle_tolerance),
            }
        })
        .collect();

    if args.json {
        let output = BalancesOutput {
            group_id: &group.id,
            group_name: &group.name,
            balances,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    writeln!(writer, "{} ({})", group.name, group.id)?;
    if balances.is_empty() {
        writeln!(writer, "No members.")?;
        return Ok(());
    }
    for entry in &balances {
        match entry.standing {
            Standing::Settled => writeln!(writer, "- {}: settled", entry.name)?,
            Standing::GetsBack => {
                writeln!(writer, "- {}: gets back {:.2}", entry.name, entry.balance)?;
            }
            Standing::HasToPay => {
                writeln!(writer, "- {}: has to pay {:.2}", entry.name, entry.balance.abs())?;
            }
        }
    }

    Ok(())
}
