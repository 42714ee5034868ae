//! Plain arithmetic mean of a finite stream

use crate::traits::StreamStatistic;

#[cfg(feature = "std")]
use crate::input::{InputError, NumericSource};

/// Running sum and count, collapsed into `sum / count` on demand
///
/// The average of an empty stream is `0.0 / 0.0`, i.e. `NaN`.
///
/// # Example
///
/// ```
/// use streamstats::statistics::Averager;
///
/// let avg: Averager = [10.0, 5.0, 6.0, 3.0, 7.0, 32.0].into_iter().collect();
/// assert_eq!(avg.average(), 10.5);
///
/// assert!(Averager::new().average().is_nan());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Averager {
    sum: f64,
    count: u64,
}

impl Averager {
    /// Create a new empty averager
    pub fn new() -> Self {
        Self { sum: 0.0, count: 0 }
    }

    /// Read every value from `source` until it is exhausted and return the average
    ///
    /// A token that fails to parse aborts the run.
    ///
    /// ```
    /// use streamstats::input::TokenReader;
    /// use streamstats::statistics::Averager;
    ///
    /// let mut source = TokenReader::new("10.0 5.0 6.0\n3.0 7.0 32.0\n".as_bytes());
    /// assert_eq!(Averager::run(&mut source).unwrap(), 10.5);
    /// ```
    #[cfg(feature = "std")]
    pub fn run<S: NumericSource + ?Sized>(source: &mut S) -> Result<f64, InputError> {
        let mut averager = Self::new();
        crate::input::consume(source, &mut averager)?;
        Ok(averager.average())
    }

    /// Add a value to the running sum
    pub fn observe(&mut self, x: f64) {
        self.sum += x;
        self.count += 1;
    }

    /// `sum / count`, `NaN` when nothing was observed
    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Get the number of values
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl StreamStatistic for Averager {
    fn observe(&mut self, value: f64) {
        Averager::observe(self, value);
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Extend<f64> for Averager {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.observe(x);
        }
    }
}

impl<'a> Extend<&'a f64> for Averager {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for Averager {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut averager = Self::new();
        averager.extend(iter);
        averager
    }
}
