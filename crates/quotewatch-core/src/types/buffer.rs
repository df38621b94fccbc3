//! Bounded quote buffer.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::Quote;

/// Ordered sequence of quotes bounded to the most recent N entries.
/// When the bound is exceeded the oldest entry is evicted first (FIFO).
#[derive(Debug, Clone)]
pub struct QuoteBuffer {
    quotes: VecDeque<Quote>,
    capacity: usize,
}

impl QuoteBuffer {
    /// Create a buffer bounded at `capacity` rows. A zero capacity is
    /// clamped to one so the buffer always holds the latest observation.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            quotes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a quote at the tail, evicting the head if at capacity.
    pub fn append(&mut self, quote: Quote) {
        if self.quotes.len() >= self.capacity {
            self.quotes.pop_front();
        }
        self.quotes.push_back(quote);
    }

    /// Clone the current contents in arrival order, without mutation.
    pub fn snapshot(&self) -> Vec<Quote> {
        self.quotes.iter().cloned().collect()
    }

    /// Get the most recent quote.
    pub fn last(&self) -> Option<&Quote> {
        self.quotes.back()
    }

    /// Get the number of buffered quotes.
    #[inline]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Get the configured bound.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shared handle for the poller/presenter pairing. A single mutex guards
/// `append` and `snapshot`, so a snapshot never observes a half-written row.
#[derive(Debug, Clone)]
pub struct SharedQuoteBuffer {
    inner: Arc<Mutex<QuoteBuffer>>,
}

impl SharedQuoteBuffer {
    /// Create a shared buffer bounded at `capacity` rows.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(QuoteBuffer::new(capacity))),
        }
    }

    /// Append a quote, evicting the oldest row if at capacity.
    pub fn append(&self, quote: Quote) {
        self.lock().append(quote);
    }

    /// Clone the current contents in arrival order.
    pub fn snapshot(&self) -> Vec<Quote> {
        self.lock().snapshot()
    }

    /// Get the most recent quote, if any.
    pub fn last(&self) -> Option<Quote> {
        self.lock().last().cloned()
    }

    /// Get the number of buffered quotes.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QuoteBuffer> {
        // A panic while holding the lock cannot leave a half-written row:
        // QuoteBuffer only moves whole Quote values, so a poisoned lock is
        // still structurally valid and safe to reuse.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(bid: f64) -> Quote {
        Quote::now("GOOG", bid, bid + 0.10)
    }

    #[test]
    fn test_buffer_append_and_order() {
        let mut buffer = QuoteBuffer::new(10);
        buffer.append(quote(1.0));
        buffer.append(quote(2.0));
        buffer.append(quote(3.0));

        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 3);
        let bids: Vec<f64> = snapshot.iter().map(|q| q.bid).collect();
        assert_eq!(bids, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_buffer_evicts_oldest_at_capacity() {
        let mut buffer = QuoteBuffer::new(3);
        for bid in [1.0, 2.0, 3.0, 4.0] {
            buffer.append(quote(bid));
        }

        assert_eq!(buffer.len(), 3);
        let bids: Vec<f64> = buffer.snapshot().iter().map(|q| q.bid).collect();
        assert_eq!(bids, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_buffer_never_exceeds_capacity() {
        let mut buffer = QuoteBuffer::new(5);
        for i in 0..100 {
            buffer.append(quote(i as f64));
            assert!(buffer.len() <= 5);
        }

        // The last 5 inserted rows survive, in arrival order.
        let bids: Vec<f64> = buffer.snapshot().iter().map(|q| q.bid).collect();
        assert_eq!(bids, vec![95.0, 96.0, 97.0, 98.0, 99.0]);
    }

    #[test]
    fn test_buffer_zero_capacity_clamped() {
        let mut buffer = QuoteBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.append(quote(1.0));
        buffer.append(quote(2.0));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last().unwrap().bid, 2.0);
    }

    #[test]
    fn test_shared_buffer_concurrent_append_and_snapshot() {
        let buffer = SharedQuoteBuffer::new(64);
        let writer = buffer.clone();

        let handle = std::thread::spawn(move || {
            for i in 0..1000 {
                writer.append(quote(i as f64));
            }
        });

        // Every observed row must be whole: bid and ask always move
        // together, so ask - bid is exactly the written spread.
        for _ in 0..200 {
            for q in buffer.snapshot() {
                assert!((q.ask - q.bid - 0.10).abs() < 1e-9);
            }
        }

        handle.join().unwrap();
        assert_eq!(buffer.len(), 64);
        assert_eq!(buffer.last().unwrap().bid, 999.0);
    }
}
