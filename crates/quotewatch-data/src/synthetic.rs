//! Synthetic quote source.

use async_trait::async_trait;
use quotewatch_core::error::DataError;
use quotewatch_core::traits::QuoteSource;
use quotewatch_core::types::Quote;
use rand::Rng;
use std::sync::{Mutex, PoisonError};

/// Maximum mid-price movement per tick.
const MAX_STEP: f64 = 0.25;

/// Quote source that synthesizes a small random walk around the last
/// mid price. Needs no credential and never fails, which makes it the
/// backing for the `demo` command and for poll-loop tests.
pub struct SyntheticQuoteSource {
    symbol: String,
    spread: f64,
    last_mid: Mutex<f64>,
}

impl SyntheticQuoteSource {
    /// Create a source walking around `base_price` with a fixed spread.
    pub fn new(symbol: impl Into<String>, base_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            spread: 0.10,
            last_mid: Mutex::new(base_price.max(1.0)),
        }
    }
}

#[async_trait]
impl QuoteSource for SyntheticQuoteSource {
    async fn poll(&self) -> Result<Quote, DataError> {
        let mut last_mid = self
            .last_mid
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let change: f64 = rand::rng().random_range(-MAX_STEP..MAX_STEP);
        // Keep the walk above the spread so the bid stays positive.
        *last_mid = (*last_mid + change).max(self.spread);

        let half_spread = self.spread / 2.0;
        Ok(Quote::now(
            self.symbol.clone(),
            *last_mid - half_spread,
            *last_mid + half_spread,
        ))
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_synthetic_quotes_keep_bid_below_ask() {
        let source = SyntheticQuoteSource::new("DEMO", 100.0);
        for _ in 0..100 {
            let quote = source.poll().await.unwrap();
            assert!(quote.bid < quote.ask);
            assert!(quote.bid > 0.0);
        }
    }

    #[tokio::test]
    async fn test_synthetic_walk_is_bounded_per_tick() {
        let source = SyntheticQuoteSource::new("DEMO", 100.0);
        let mut last_mid = 100.0;
        for _ in 0..100 {
            let quote = source.poll().await.unwrap();
            assert!((quote.mid() - last_mid).abs() <= MAX_STEP + 1e-9);
            last_mid = quote.mid();
        }
    }
}
