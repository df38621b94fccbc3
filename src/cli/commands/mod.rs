//! Command implementations.

pub mod demo;
pub mod stream;
pub mod validate;

use anyhow::Result;
use quotewatch_config::QuoteSettings;
use quotewatch_core::traits::QuoteSource;
use quotewatch_core::types::SharedQuoteBuffer;
use quotewatch_data::{run_poll_loop, shutdown_channel};
use quotewatch_monitor::{run_presenter_loop, ChartDashboard, TextPresenter};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

/// Chart/text redraw cadence. Independent of the poll interval: the
/// presenter just re-reads the buffer.
const REFRESH_MS: u64 = 250;

/// Wire a quote source into the buffer/presenter pipeline and run it.
///
/// The poll loop runs on the runtime while the presenter owns the
/// foreground: the ratatui chart on a blocking thread when stdout is a
/// terminal, a line-per-row text presenter otherwise. Returning from the
/// presenter triggers shutdown; the poll loop finishes any in-flight
/// request and exits.
pub(crate) async fn run_pipeline(
    source: Arc<dyn QuoteSource>,
    quotes: &QuoteSettings,
    plain: bool,
) -> Result<()> {
    let buffer = SharedQuoteBuffer::new(quotes.backlog);
    let (shutdown_tx, shutdown_rx) = shutdown_channel();

    let poll_handle = tokio::spawn(run_poll_loop(
        source,
        buffer.clone(),
        Duration::from_secs(quotes.interval_secs.max(1)),
        shutdown_rx.clone(),
    ));

    if !plain && std::io::stdout().is_terminal() {
        let dashboard = ChartDashboard::new(REFRESH_MS);
        let chart_buffer = buffer.clone();
        tokio::task::spawn_blocking(move || dashboard.run(move || chart_buffer.snapshot()))
            .await??;
    } else {
        let mut presenter = TextPresenter::new();
        tokio::select! {
            _ = run_presenter_loop(
                &mut presenter,
                buffer.clone(),
                Duration::from_millis(REFRESH_MS),
                shutdown_rx,
            ) => {}
            _ = tokio::signal::ctrl_c() => {}
        }
    }

    let _ = shutdown_tx.send(true);
    poll_handle.await?;
    Ok(())
}
