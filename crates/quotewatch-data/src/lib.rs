//! Quote sources and the periodic poll loop.

mod poll_loop;
mod rest_source;
mod synthetic;

pub use poll_loop::{run_poll_loop, shutdown_channel};
pub use rest_source::{RestQuoteConfig, RestQuoteSource};
pub use synthetic::SyntheticQuoteSource;
