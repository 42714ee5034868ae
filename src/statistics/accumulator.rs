//! Running mean, sample variance and sample standard deviation
//!
//! Computes streaming moments using Welford's numerically stable online algorithm.

use core::fmt;

use crate::math;
use crate::traits::StreamStatistic;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Running moments calculator using Welford's algorithm
///
/// Tracks the count, mean and sample variance of a stream in a single pass
/// with O(1) memory. The squared-deviation sum is grown by
/// `(n - 1) / n * delta²` on each value, which avoids the catastrophic
/// cancellation of `Σx² - n·mean²`.
///
/// Undefined statistics are reported as `NaN`, like `0.0 / 0.0`: the
/// variance of fewer than two values is `NaN`, and so is its square root.
///
/// # Example
///
/// ```
/// use streamstats::statistics::Accumulator;
///
/// let mut acc = Accumulator::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.observe(value);
/// }
///
/// assert_eq!(acc.count(), 8);
/// assert!((acc.mean() - 5.0).abs() < 1e-12);
/// assert!((acc.variance() - 32.0 / 7.0).abs() < 1e-12);
/// ```
///
/// ```
/// use streamstats::statistics::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.observe(5.0);
///
/// assert!(acc.variance().is_nan());
/// assert_eq!(acc.checked_variance(), None);
/// assert_eq!(acc.describe(), "n = 1, mean = 5.0, stddev = NaN");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accumulator {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared deviations from the mean (M2)
    m2: f64,
}

impl Accumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a value to the accumulator
    ///
    /// NaN and infinite values are not filtered; they propagate into the
    /// mean and variance.
    pub fn observe(&mut self, x: f64) {
        self.count += 1;
        let n = self.count as f64;
        let delta = x - self.mean;
        self.mean += delta / n;
        self.m2 += (n - 1.0) / n * delta * delta;
    }

    /// Get the number of values
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean, `0.0` before any value
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the sample variance (Bessel's correction)
    ///
    /// Returns `NaN` when fewer than two values have been observed.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return f64::NAN;
        }
        self.m2 / (self.count - 1) as f64
    }

    /// Get the sample standard deviation, `NaN` when the variance is undefined
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Sample variance, or `None` when fewer than two values have been observed
    pub fn checked_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.variance())
    }

    /// Sample standard deviation, or `None` when fewer than two values have been observed
    pub fn checked_stddev(&self) -> Option<f64> {
        self.checked_variance().map(math::sqrt)
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// One-line summary: `n = <count>, mean = <mean>, stddev = <stddev>`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing ".0" on integral values
        write!(
            f,
            "n = {}, mean = {:?}, stddev = {:?}",
            self.count,
            self.mean(),
            self.stddev()
        )
    }
}

impl StreamStatistic for Accumulator {
    fn observe(&mut self, value: f64) {
        Accumulator::observe(self, value);
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Extend<f64> for Accumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.observe(x);
        }
    }
}

impl<'a> Extend<&'a f64> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
