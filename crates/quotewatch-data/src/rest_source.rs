//! REST quote source.

use async_trait::async_trait;
use quotewatch_core::error::{DataError, QuotewatchError};
use quotewatch_core::traits::QuoteSource;
use quotewatch_core::types::{Credential, Quote};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Explicit configuration for the REST quote source. `symbol` and
/// `credential` are named, typed fields passed at construction.
#[derive(Debug, Clone)]
pub struct RestQuoteConfig {
    /// Quote service base URL (no trailing slash required).
    pub base_url: String,
    /// Ticker symbol to observe. Must be non-empty.
    pub symbol: String,
    /// API key sent as the `apikey` query parameter.
    pub credential: Credential,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Quote source polling `GET {base_url}/v1/marketdata/{symbol}/quotes`.
pub struct RestQuoteSource {
    config: RestQuoteConfig,
    client: Client,
}

impl RestQuoteSource {
    /// Create a source for the configured symbol.
    ///
    /// # Errors
    /// Fails if the symbol is empty; credential correctness is only
    /// discovered when the service rejects a request.
    pub fn new(config: RestQuoteConfig) -> Result<Self, QuotewatchError> {
        if config.symbol.trim().is_empty() {
            return Err(QuotewatchError::Internal(
                "quote source requires a non-empty symbol".to_string(),
            ));
        }
        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1/marketdata/{}/quotes",
            self.config.base_url.trim_end_matches('/'),
            self.config.symbol
        )
    }
}

#[async_trait]
impl QuoteSource for RestQuoteSource {
    async fn poll(&self) -> Result<Quote, DataError> {
        let response = self
            .client
            .get(self.endpoint_url())
            .query(&[("apikey", self.config.credential.expose())])
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DataError::Transport(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    DataError::Transport(format!("connection failed: {e}"))
                } else {
                    DataError::Transport(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Transport(format!(
                "quote service returned status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DataError::Transport(format!("failed to read response body: {e}")))?;

        let (bid, ask) = parse_quote_body(&self.config.symbol, &body)?;
        Ok(Quote::now(self.config.symbol.clone(), bid, ask))
    }

    fn symbol(&self) -> &str {
        &self.config.symbol
    }

    fn name(&self) -> &str {
        "rest"
    }
}

/// Extract bid and ask from a body shaped as
/// `{ "<symbol>": { "bidPrice": n, "askPrice": n, ... } }`.
fn parse_quote_body(symbol: &str, body: &str) -> Result<(f64, f64), DataError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| DataError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let entry = value.get(symbol).ok_or_else(|| {
        DataError::MalformedResponse(format!("response has no entry for symbol '{symbol}'"))
    })?;

    let bid = entry
        .get("bidPrice")
        .and_then(Value::as_f64)
        .ok_or_else(|| DataError::MalformedResponse("missing or non-numeric bidPrice".into()))?;
    let ask = entry
        .get("askPrice")
        .and_then(Value::as_f64)
        .ok_or_else(|| DataError::MalformedResponse("missing or non-numeric askPrice".into()))?;

    Ok((bid, ask))
}
