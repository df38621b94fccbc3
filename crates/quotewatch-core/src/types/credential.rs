//! API credential wrapper.

use std::fmt;

/// Opaque API key. Loaded once at startup and held for the process
/// lifetime. `Debug` and `Display` redact the value so the key cannot
/// leak through log lines or error messages.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Access the raw key for building the API request.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Check whether the key is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
