use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sw_cli::commands::{alerts, balances, categorize, report, status, summary};
use sw_cli::{Cli, Commands, Config};

/// Load config, applying the `--data` override.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(data) = &cli.data {
        config.snapshot_path.clone_from(data);
    }
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(&cli)?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Balances(args) => balances::run(&mut stdout, args, &config)?,
        Commands::Alerts(args) => alerts::run(&mut stdout, args, &config)?,
        Commands::Categorize(args) => categorize::run(&mut stdout, args, &config)?,
        Commands::Report(args) => report::run(&mut stdout, args, &config)?,
        Commands::Summary(args) => summary::run(&mut stdout, args, &config)?,
        Commands::Status => status::run(&mut stdout, &config)?,
    }

    Ok(())
}
