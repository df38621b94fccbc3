//! Core types and traits for the quote streaming pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Quote, QuoteBuffer, SharedQuoteBuffer)
//! - The Credential wrapper for the API key
//! - Core traits for quote sources and presenters

pub mod types;
pub mod traits;
pub mod error;

pub use error::{QuotewatchError, QuotewatchResult};
pub use types::*;
pub use traits::*;
