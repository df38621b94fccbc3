//! Core trait definitions.

mod presenter;
mod quote_source;

pub use presenter::Presenter;
pub use quote_source::QuoteSource;
