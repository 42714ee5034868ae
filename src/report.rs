//! Text rendering of the summary lines printed by the command-line programs

use std::io::{self, Write};

use crate::statistics::Accumulator;

/// Write `Average is <value>`
///
/// ```
/// let mut out = Vec::new();
/// streamstats::report::write_average(&mut out, 10.5).unwrap();
/// assert_eq!(out, b"Average is 10.5\n");
/// ```
pub fn write_average<W: Write + ?Sized>(out: &mut W, average: f64) -> io::Result<()> {
    writeln!(out, "Average is {:?}", average)
}

/// Write count, mean, stddev and variance (five decimals), then the one-line summary
pub fn write_accumulator<W: Write + ?Sized>(out: &mut W, acc: &Accumulator) -> io::Result<()> {
    writeln!(out, "n      = {}", acc.count())?;
    writeln!(out, "mean   = {:.5}", acc.mean())?;
    writeln!(out, "stddev = {:.5}", acc.stddev())?;
    writeln!(out, "var    = {:.5}", acc.variance())?;
    writeln!(out, "{}", acc)
}
