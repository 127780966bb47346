//! Expense tracker CLI library.
//!
//! This crate provides the CLI interface for spendwise.

mod cli;
pub mod commands;
mod config;
pub mod snapshot;

pub use cli::{Cli, Commands};
pub use config::Config;
