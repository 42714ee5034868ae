//! Core trait for streaming statistics
//!
//! Both [`Averager`](crate::statistics::Averager) and
//! [`Accumulator`](crate::statistics::Accumulator) implement
//! [`StreamStatistic`], so callers can drive either one from the same
//! input loop.

use core::fmt::Debug;

/// A statistic computed in one pass over a stream of `f64` values
///
/// Implementations keep O(1) state and never store the values themselves.
pub trait StreamStatistic: Clone + Debug {
    /// Incorporate one more value
    fn observe(&mut self, value: f64);

    /// Number of values observed so far
    fn count(&self) -> u64;

    /// Reset to the empty state
    fn clear(&mut self);

    /// Check if no value has been observed
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Observe every value of an iterator, in order
    fn observe_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.observe(value);
        }
    }
}
