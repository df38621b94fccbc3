//! Quote source trait definition.

use async_trait::async_trait;

use crate::error::DataError;
use crate::types::Quote;

/// Trait for pollable quote sources.
///
/// A source performs exactly one fetch per call; scheduling is owned by
/// the poll loop, not the source. A failed poll must leave no state
/// behind: the next call starts fresh.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch one quote observation.
    ///
    /// # Errors
    /// Returns [`DataError::Transport`] when the request does not
    /// complete (network failure, non-2xx status, timeout) and
    /// [`DataError::MalformedResponse`] when the body cannot be parsed
    /// into a quote.
    async fn poll(&self) -> Result<Quote, DataError>;

    /// Get the symbol this source observes.
    fn symbol(&self) -> &str;

    /// Get the source name.
    fn name(&self) -> &str;
}
