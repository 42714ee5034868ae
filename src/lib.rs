//! # Streamstats
//!
//! One-pass statistics over numeric streams.
//!
//! - [`Averager`]: running sum and count, reported as `sum / count`
//! - [`Accumulator`]: running mean, sample variance and sample standard
//!   deviation using Welford's numerically stable update
//!
//! Both keep constant memory and never store the values they observe.
//! Undefined results follow IEEE-754: the average of nothing and the
//! variance of fewer than two values are `NaN`.
//!
//! ## Quick Start
//!
//! ```rust
//! use streamstats::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     acc.observe(x);
//! }
//! println!("{}", acc.describe());
//!
//! let avg: Averager = [10.0, 5.0, 6.0, 3.0, 7.0, 32.0].into_iter().collect();
//! assert_eq!(avg.average(), 10.5);
//! ```
//!
//! ## Reading Input
//!
//! With the `std` feature, [`input::TokenReader`] reads whitespace-separated
//! numbers from standard input or a file, and [`report`] renders the same
//! summary lines the `average` and `accumulator` programs print.
//!
//! ```rust
//! use streamstats::input::TokenReader;
//! use streamstats::statistics::Averager;
//!
//! let mut source = TokenReader::new("1 2 3 4".as_bytes());
//! assert_eq!(Averager::run(&mut source).unwrap(), 2.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): input sources and report rendering
//! - `serde`: Serialize/Deserialize for both statistics
//! - `cli`: the `average` and `accumulator` binaries
//!
//! Without `std` the crate is `no_std` (with `alloc`) and uses `libm`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

pub mod statistics;
pub mod traits;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod input;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod report;

pub mod prelude {
    pub use crate::statistics::{Accumulator, Averager};
    pub use crate::traits::*;

    #[cfg(feature = "std")]
    pub use crate::input::{NumericSource, SliceSource, TokenReader};
}

pub use statistics::{Accumulator, Averager};
