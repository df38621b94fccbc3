//! Core data types.

mod buffer;
mod credential;
mod quote;

pub use buffer::{QuoteBuffer, SharedQuoteBuffer};
pub use credential::Credential;
pub use quote::Quote;
