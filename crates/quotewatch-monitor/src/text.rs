//! Plain-text presenter.

use chrono::{DateTime, Utc};
use quotewatch_core::error::QuotewatchError;
use quotewatch_core::traits::Presenter;
use quotewatch_core::types::Quote;

/// Presenter printing one line per new observation. Used when stdout is
/// not a terminal, and by the demo's plain mode.
#[derive(Debug, Default)]
pub struct TextPresenter {
    last_seen: Option<DateTime<Utc>>,
}

impl TextPresenter {
    /// Create a new text presenter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for TextPresenter {
    fn render(&mut self, snapshot: &[Quote]) -> Result<(), QuotewatchError> {
        for quote in snapshot.iter() {
            if Some(quote.timestamp) <= self.last_seen {
                continue;
            }
            println!(
                "{}  {:<6}  bid {:>10.2}  ask {:>10.2}  spread {:>6.2}",
                quote.timestamp.format("%H:%M:%S%.3f"),
                quote.symbol,
                quote.bid,
                quote.ask,
                quote.spread()
            );
            self.last_seen = Some(quote.timestamp);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quote(secs: i64, bid: f64) -> Quote {
        Quote::new(
            "GOOG",
            Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
            bid,
            bid + 0.10,
        )
    }

    #[test]
    fn test_text_presenter_tracks_last_seen_row() {
        let mut presenter = TextPresenter::new();
        let snapshot = vec![quote(0, 1.0), quote(1, 2.0)];

        presenter.render(&snapshot).unwrap();
        assert_eq!(presenter.last_seen, Some(snapshot[1].timestamp));

        // Re-rendering the same snapshot advances nothing.
        presenter.render(&snapshot).unwrap();
        assert_eq!(presenter.last_seen, Some(snapshot[1].timestamp));
    }

    #[test]
    fn test_text_presenter_tolerates_empty_snapshot() {
        let mut presenter = TextPresenter::new();
        presenter.render(&[]).unwrap();
        assert_eq!(presenter.last_seen, None);
    }
}
