//! Host driver for the exclusive scan entry point.

use crate::buffer::WorkingBuffer;
use crate::error::Error;
use scan_tools::blelloch;

/// Exclusive prefix sums over `xs`.
///
/// `result[i]` is the sum of `xs[0..i)`, so `result[0]` is 0 for non-empty
/// input and `scan(&[])` is empty. The padded positions the engine scans
/// past `xs.len()` are internal scratch and never reported.
///
/// Cumulative sums that exceed `i32` are not guarded; the caller bounds
/// input magnitude and length so totals fit.
pub fn scan(xs: &[i32]) -> Result<Vec<i32>, Error> {
    let mut buffer = WorkingBuffer::padded(xs)?;
    blelloch::exclusive_scan_in_place(buffer.as_mut_slice());
    Ok(buffer.into_logical())
}
