//! Render loop for non-interactive presenters.

use std::time::Duration;

use quotewatch_core::traits::Presenter;
use quotewatch_core::types::SharedQuoteBuffer;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::warn;

/// Re-render whenever the buffer has changed, checked on a fixed refresh
/// interval. Rendering is always cheaper than production, so no
/// backpressure is needed. Exits when the shutdown signal flips to
/// `true` or its sender is dropped.
pub async fn run_presenter_loop(
    presenter: &mut dyn Presenter,
    buffer: SharedQuoteBuffer,
    refresh: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(refresh);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_len = 0usize;
    let mut last_ts = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = buffer.snapshot();
                let ts = snapshot.last().map(|q| q.timestamp);
                if snapshot.len() == last_len && ts == last_ts {
                    continue;
                }
                last_len = snapshot.len();
                last_ts = ts;
                if let Err(e) = presenter.render(&snapshot) {
                    warn!(error = %e, "render failed");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotewatch_core::error::QuotewatchError;
    use quotewatch_core::types::Quote;

    /// Presenter recording every snapshot length it was asked to draw.
    #[derive(Default)]
    struct RecordingPresenter {
        rendered: Vec<usize>,
    }

    impl Presenter for RecordingPresenter {
        fn render(&mut self, snapshot: &[Quote]) -> Result<(), QuotewatchError> {
            self.rendered.push(snapshot.len());
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_presenter_only_renders_on_change() {
        let buffer = SharedQuoteBuffer::new(10);
        buffer.append(Quote::now("TEST", 1.0, 1.1));

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut presenter = RecordingPresenter::default();

        let buffer_clone = buffer.clone();
        let driver = async move {
            // Several refresh intervals pass with no new rows; only the
            // first one should trigger a render.
            time::sleep(Duration::from_millis(350)).await;
            buffer_clone.append(Quote::now("TEST", 2.0, 2.1));
            time::sleep(Duration::from_millis(250)).await;
            shutdown_tx.send(true).unwrap();
        };

        tokio::join!(
            run_presenter_loop(
                &mut presenter,
                buffer,
                Duration::from_millis(100),
                shutdown_rx,
            ),
            driver,
        );

        assert_eq!(presenter.rendered, vec![1, 2]);
    }
}
