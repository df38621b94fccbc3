//! Quote streaming CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use quotewatch_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging. Flags win over the config `[logging]` section; a
    // config that fails to load is reported later by the command itself.
    let logging = quotewatch_config::load_config(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    let (log_level, json_logs) = cli::effective_logging(cli.log_level.as_ref(), cli.json_logs, &logging);
    setup_logging(&log_level, json_logs);

    // Execute command
    match cli.command {
        Commands::Stream(args) => cli::commands::stream::run(args, &cli.config).await,
        Commands::Demo(args) => cli::commands::demo::run(args, &cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
