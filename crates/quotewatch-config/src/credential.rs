//! Credential providers.
//!
//! The credential is loaded exactly once at startup, from the first
//! provider able to supply it: the config artifact, then an interactive
//! prompt on the controlling terminal. The raw key never reaches a log
//! line; it travels only inside [`Credential`].

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

use quotewatch_core::error::ConfigError;
use quotewatch_core::types::Credential;
use tracing::debug;

use crate::settings::AppConfig;

/// Source of the single API credential.
pub trait CredentialProvider {
    /// Attempt to load the credential.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingCredential`] when this provider has
    /// no credential to offer; the loader then tries the next provider.
    fn load(&self) -> Result<Credential, ConfigError>;

    /// Get the provider name, for diagnostics.
    fn name(&self) -> &str;
}

/// Provider backed by the `api_key` field of the config artifact.
pub struct FileCredentialProvider {
    api_key: Option<String>,
}

impl FileCredentialProvider {
    /// Create a provider from the loaded configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
        }
    }
}

impl CredentialProvider for FileCredentialProvider {
    fn load(&self) -> Result<Credential, ConfigError> {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => Ok(Credential::new(key.trim())),
            _ => Err(ConfigError::MissingCredential),
        }
    }

    fn name(&self) -> &str {
        "config file"
    }
}

/// Provider that prompts on the controlling terminal. The reader is
/// injected so the entered-value path is testable without a terminal.
pub struct PromptCredentialProvider<R> {
    reader: Mutex<R>,
    interactive: bool,
}

impl PromptCredentialProvider<io::StdinLock<'static>> {
    /// Create the production provider reading from stdin. The prompt is
    /// only offered when stdin is a terminal.
    pub fn stdin() -> Self {
        let interactive = io::stdin().is_terminal();
        Self::with_reader(io::stdin().lock(), interactive)
    }
}

impl<R: BufRead> PromptCredentialProvider<R> {
    /// Create a provider over an arbitrary reader.
    pub fn with_reader(reader: R, interactive: bool) -> Self {
        Self {
            reader: Mutex::new(reader),
            interactive,
        }
    }
}

impl<R: BufRead> CredentialProvider for PromptCredentialProvider<R> {
    fn load(&self) -> Result<Credential, ConfigError> {
        if !self.interactive {
            return Err(ConfigError::MissingCredential);
        }

        eprint!("Please enter your API key: ");
        io::stderr()
            .flush()
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        let mut line = String::new();
        self.reader
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_line(&mut line)
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        let key = line.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Credential::new(key))
    }

    fn name(&self) -> &str {
        "interactive prompt"
    }
}

/// Load the credential from the first available provider.
///
/// # Errors
/// Returns [`ConfigError::MissingCredential`] only when the config
/// artifact carries no key and stdin is not a terminal. This is fatal at
/// startup.
pub fn load_credential(config: &AppConfig) -> Result<Credential, ConfigError> {
    let file_provider = FileCredentialProvider::new(config);
    let prompt_provider = PromptCredentialProvider::stdin();
    let providers: [&dyn CredentialProvider; 2] = [&file_provider, &prompt_provider];

    for provider in providers {
        match provider.load() {
            Ok(credential) => {
                debug!(provider = provider.name(), "credential loaded");
                return Ok(credential);
            }
            Err(ConfigError::MissingCredential) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(ConfigError::MissingCredential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_provider_returns_entered_key() {
        let provider = PromptCredentialProvider::with_reader(Cursor::new("entered-key\n"), true);
        let credential = provider.load().expect("entered key should load");
        assert_eq!(credential.expose(), "entered-key");
    }

    #[test]
    fn test_prompt_provider_rejects_blank_entry() {
        let provider = PromptCredentialProvider::with_reader(Cursor::new("\n"), true);
        assert!(matches!(
            provider.load(),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_prompt_provider_unavailable_without_terminal() {
        // A pending entry must not be read when stdin is not a terminal.
        let provider = PromptCredentialProvider::with_reader(Cursor::new("entered-key\n"), false);
        assert!(matches!(
            provider.load(),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_file_provider_returns_configured_key() {
        let config = AppConfig {
            api_key: Some("X".to_string()),
            ..AppConfig::default()
        };

        let credential = FileCredentialProvider::new(&config)
            .load()
            .expect("configured key should load");
        assert_eq!(credential.expose(), "X");
    }

    #[test]
    fn test_file_provider_trims_whitespace() {
        let config = AppConfig {
            api_key: Some("  X  ".to_string()),
            ..AppConfig::default()
        };

        let credential = FileCredentialProvider::new(&config).load().unwrap();
        assert_eq!(credential.expose(), "X");
    }

    #[test]
    fn test_file_provider_rejects_absent_or_blank_key() {
        let config = AppConfig::default();
        assert!(matches!(
            FileCredentialProvider::new(&config).load(),
            Err(ConfigError::MissingCredential)
        ));

        let config = AppConfig {
            api_key: Some("   ".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            FileCredentialProvider::new(&config).load(),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_load_credential_fails_without_key_or_terminal() {
        // Test runners detach stdin from the terminal, so the prompt
        // fallback is unavailable here and the load must fail.
        let config = AppConfig::default();
        assert!(matches!(
            load_credential(&config),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_load_credential_prefers_config_file() {
        let config = AppConfig {
            api_key: Some("from-file".to_string()),
            ..AppConfig::default()
        };

        let credential = load_credential(&config).unwrap();
        assert_eq!(credential.expose(), "from-file");
    }
}
