//! Validate configuration command.

use anyhow::Result;
use quotewatch_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Quote service: {}", config.quotes.base_url);
            println!("Symbol: {}", config.quotes.symbol);
            println!("Poll interval: {}s", config.quotes.interval_secs);
            println!("Backlog: {} rows", config.quotes.backlog);
            // Never echo the key itself.
            println!(
                "API key: {}",
                if config.api_key.is_some() {
                    "configured"
                } else {
                    "not set (will prompt)"
                }
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
