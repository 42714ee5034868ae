//! Numeric input sources
//!
//! A [`NumericSource`] yields a finite (or unbounded) sequence of `f64`
//! values through a "has more / read next" pair of calls. Two sources are
//! provided:
//!
//! - [`TokenReader`]: whitespace-separated tokens from any [`BufRead`](std::io::BufRead),
//!   typically standard input or a file
//! - [`SliceSource`]: an in-memory slice
//!
//! # Example
//!
//! ```
//! use streamstats::input::{self, TokenReader};
//! use streamstats::statistics::Accumulator;
//!
//! let mut source = TokenReader::new("2 4 4 4\n5 5 7 9\n".as_bytes());
//! let mut acc = Accumulator::new();
//!
//! let read = input::consume(&mut source, &mut acc).unwrap();
//! assert_eq!(read, 8);
//! assert!((acc.mean() - 5.0).abs() < 1e-12);
//! ```

mod slice;
mod token_reader;

pub use slice::SliceSource;
pub use token_reader::TokenReader;

use std::io;
use std::path::Path;

use crate::traits::StreamStatistic;

/// Error while reading values from a source
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Token is not a floating-point literal
    #[error("token {index} is not a number: {token:?}")]
    Parse { token: String, index: u64 },

    /// `read_f64` was called on an exhausted source
    #[error("no more input values")]
    Exhausted,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A blocking source of `f64` values
pub trait NumericSource {
    /// Check whether another value can be read
    ///
    /// Once this returns `false` the source stays exhausted.
    fn has_more(&mut self) -> Result<bool, InputError>;

    /// Read the next value
    ///
    /// Returns [`InputError::Exhausted`] if [`has_more`](Self::has_more)
    /// would return `false`.
    fn read_f64(&mut self) -> Result<f64, InputError>;

    /// Iterate over the remaining values
    ///
    /// The iterator ends after the first error.
    fn values(&mut self) -> Values<'_, Self>
    where
        Self: Sized,
    {
        Values {
            source: self,
            failed: false,
        }
    }
}

impl<S: NumericSource + ?Sized> NumericSource for &mut S {
    fn has_more(&mut self) -> Result<bool, InputError> {
        (**self).has_more()
    }

    fn read_f64(&mut self) -> Result<f64, InputError> {
        (**self).read_f64()
    }
}

/// Iterator over the values of a [`NumericSource`]
#[derive(Debug)]
pub struct Values<'s, S> {
    source: &'s mut S,
    failed: bool,
}

impl<S: NumericSource> Iterator for Values<'_, S> {
    type Item = Result<f64, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = match self.source.has_more() {
            Ok(true) => self.source.read_f64(),
            Ok(false) => return None,
            Err(e) => Err(e),
        };
        self.failed = item.is_err();
        Some(item)
    }
}

/// Feed every value of `source` into `stat` until the source is exhausted
///
/// Returns the number of values read. Stops at the first error; values
/// read before it stay observed.
pub fn consume<S, T>(source: &mut S, stat: &mut T) -> Result<u64, InputError>
where
    S: NumericSource + ?Sized,
    T: StreamStatistic,
{
    let mut read = 0u64;
    while source.has_more()? {
        stat.observe(source.read_f64()?);
        read += 1;
    }
    log::debug!("consumed {} values", read);
    Ok(read)
}

/// Open a token source over the file at `path`, or standard input when `None`
pub fn open(path: Option<&Path>) -> io::Result<Box<dyn NumericSource>> {
    match path {
        Some(path) => {
            log::info!("reading numbers from {}", path.display());
            Ok(Box::new(TokenReader::open(path)?))
        }
        None => {
            log::info!("reading numbers from standard input");
            Ok(Box::new(TokenReader::stdin()))
        }
    }
}
