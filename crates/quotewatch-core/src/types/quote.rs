//! Polled quote observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One polled bid/ask observation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol
    pub symbol: String,
    /// Wall-clock time of the observation (UTC)
    pub timestamp: DateTime<Utc>,
    /// Best bid price
    pub bid: f64,
    /// Best ask price
    pub ask: f64,
}

impl Quote {
    /// Create a new quote stamped with the given observation time.
    pub fn new(symbol: impl Into<String>, timestamp: DateTime<Utc>, bid: f64, ask: f64) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp,
            bid,
            ask,
        }
    }

    /// Create a new quote stamped with the current wall-clock time.
    pub fn now(symbol: impl Into<String>, bid: f64, ask: f64) -> Self {
        Self::new(symbol, Utc::now(), bid, ask)
    }

    /// Get the mid price.
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Get the spread.
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Get the spread as a percentage of the mid price.
    pub fn spread_percent(&self) -> f64 {
        let mid = self.mid();
        if mid == 0.0 {
            0.0
        } else {
            (self.spread() / mid) * 100.0
        }
    }
}
