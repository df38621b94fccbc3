//! Configuration management.

mod credential;
mod settings;

pub use credential::{
    load_credential, CredentialProvider, FileCredentialProvider, PromptCredentialProvider,
};
pub use settings::{AppConfig, AppSettings, LoggingConfig, QuoteSettings};

use config::{Config, Environment, File};
use quotewatch_core::error::ConfigError;
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional: when absent, defaults plus `QUOTEWATCH`-prefixed
/// environment overrides apply and credential loading falls back to the
/// interactive prompt.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("QUOTEWATCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ConfigError::Read(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ConfigError::Parse(e.to_string()))
}
