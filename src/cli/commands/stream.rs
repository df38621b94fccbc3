//! Live quote streaming command.

use anyhow::Result;
use quotewatch_config::{load_config, load_credential};
use quotewatch_data::{RestQuoteConfig, RestQuoteSource};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::cli::StreamArgs;

pub async fn run(args: StreamArgs, config_path: &Path) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(symbol) = args.symbol {
        config.quotes.symbol = symbol;
    }
    if let Some(interval_secs) = args.interval_secs {
        config.quotes.interval_secs = interval_secs;
    }
    if let Some(backlog) = args.backlog {
        config.quotes.backlog = backlog;
    }

    // Fatal when neither the config file nor a terminal can supply a key.
    let credential = load_credential(&config)?;

    let source = Arc::new(RestQuoteSource::new(RestQuoteConfig {
        base_url: config.quotes.base_url.clone(),
        symbol: config.quotes.symbol.clone(),
        credential,
        timeout: Duration::from_millis(config.quotes.timeout_ms),
    })?);

    info!(
        symbol = %config.quotes.symbol,
        interval_secs = config.quotes.interval_secs,
        backlog = config.quotes.backlog,
        "starting quote stream"
    );

    super::run_pipeline(source, &config.quotes, args.plain).await
}
