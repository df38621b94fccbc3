//! Presenter trait definition.

use crate::error::QuotewatchResult;
use crate::types::Quote;

/// Rendering boundary for the bounded buffer.
///
/// Implementations accept an ordered sequence of quotes and display or
/// update a view of bid and ask over time. A snapshot may be empty or
/// sparse (gaps where ticks failed); presenters must tolerate both.
pub trait Presenter {
    /// Render the given snapshot.
    fn render(&mut self, snapshot: &[Quote]) -> QuotewatchResult<()>;
}
