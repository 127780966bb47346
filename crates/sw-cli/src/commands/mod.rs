//! CLI subcommand implementations.

pub mod alerts;
pub mod balances;
pub mod categorize;
pub mod report;
pub mod status;
pub mod summary;
pub mod util;
