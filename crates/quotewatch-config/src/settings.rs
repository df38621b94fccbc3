//! Configuration structures.

use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub quotes: QuoteSettings,
    /// Optional API credential. When absent the loader falls back to an
    /// interactive prompt.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "quotewatch".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Quote polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Quote service base URL (no trailing slash).
    pub base_url: String,
    /// Ticker symbol to observe.
    pub symbol: String,
    /// Wall-clock seconds between poll ticks.
    pub interval_secs: u64,
    /// Bound on the rendering window (most recent rows kept).
    pub backlog: usize,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.tdameritrade.com".to_string(),
            symbol: "GOOG".to_string(),
            interval_secs: 5,
            backlog: 1000,
            timeout_ms: 3000,
        }
    }
}
