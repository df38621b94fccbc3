//! Error types for the quote streaming pipeline.

use thiserror::Error;

/// Top-level application error.
#[derive(Error, Debug)]
pub enum QuotewatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Startup configuration errors. These are fatal: the process cannot
/// proceed without a credential and a parseable config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API credential: config file has no api_key and stdin is not a terminal")]
    MissingCredential,

    #[error("Failed to read configuration: {0}")]
    Read(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Per-tick polling errors. These are recoverable: the tick is skipped,
/// logged, and the poll loop continues.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for quotewatch operations.
pub type QuotewatchResult<T> = Result<T, QuotewatchError>;
