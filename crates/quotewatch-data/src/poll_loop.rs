//! Periodic poll loop.

use std::sync::Arc;
use std::time::Duration;

use quotewatch_core::traits::QuoteSource;
use quotewatch_core::types::SharedQuoteBuffer;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

/// Create the shutdown signal pair for a poll loop.
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Drive a quote source on a fixed wall-clock interval, appending each
/// successful observation to the shared buffer.
///
/// Polls are awaited inline, so a slow request delays the following tick
/// instead of overlapping it; missed ticks are not replayed as a burst.
/// A failed tick is logged at warn level and skipped; it never mutates
/// the buffer and never terminates the loop. The loop exits when the
/// shutdown signal flips to `true` or its sender is dropped, letting any
/// in-flight request finish first.
pub async fn run_poll_loop(
    source: Arc<dyn QuoteSource>,
    buffer: SharedQuoteBuffer,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match source.poll().await {
                    Ok(quote) => {
                        debug!(
                            symbol = %quote.symbol,
                            bid = quote.bid,
                            ask = quote.ask,
                            "quote tick"
                        );
                        buffer.append(quote);
                    }
                    Err(e) => {
                        warn!(source = source.name(), error = %e, "poll tick failed, skipping");
                    }
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    debug!(source = source.name(), "poll loop stopped");
}
