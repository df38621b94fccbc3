//! Synthetic streaming demo command.

use anyhow::Result;
use quotewatch_config::load_config;
use quotewatch_core::traits::QuoteSource;
use quotewatch_data::SyntheticQuoteSource;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::cli::DemoArgs;

pub async fn run(args: DemoArgs, config_path: &Path) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(interval_secs) = args.interval_secs {
        config.quotes.interval_secs = interval_secs;
    }
    if let Some(backlog) = args.backlog {
        config.quotes.backlog = backlog;
    }

    let source = Arc::new(SyntheticQuoteSource::new(args.symbol, args.base_price));

    info!(
        symbol = source.symbol(),
        base_price = args.base_price,
        interval_secs = config.quotes.interval_secs,
        "starting synthetic stream"
    );

    super::run_pipeline(source, &config.quotes, args.plain).await
}
