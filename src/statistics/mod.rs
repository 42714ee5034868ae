//! Statistical summaries for streaming data
//!
//! Both statistics are computed in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use streamstats::statistics::{Accumulator, Averager};
//!
//! let mut acc = Accumulator::new();
//! let mut avg = Averager::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     acc.observe(value);
//!     avg.observe(value);
//! }
//!
//! println!("Mean: {}", acc.mean());
//! println!("Stddev: {}", acc.stddev());
//! println!("Average: {}", avg.average());
//! ```

mod accumulator;
mod average;

pub use accumulator::Accumulator;
pub use average::Averager;
