//! Padded working buffer owned by a single scan call.

use crate::error::Error;

/// Smallest power of two >= `n`. Returns 1 for `n = 0` so the engine always
/// has a minimum unit to operate on.
pub fn padded_len(n: usize) -> usize {
    n.next_power_of_two()
}

/// Mutable scratch for one scan invocation.
///
/// The caller's logical data is copied into a zero-padded buffer whose
/// length is the smallest power of two that holds it, so the tree passes'
/// halving and doubling divide evenly. Padding positions never alter the
/// prefix sums of logical positions (they are additive zeros) and are never
/// reported back; the buffer is dropped when the call returns.
pub struct WorkingBuffer {
    data: Vec<i32>,
    logical_len: usize,
}

impl WorkingBuffer {
    /// Copies `xs` into a fresh zero-padded buffer.
    pub fn padded(xs: &[i32]) -> Result<Self, Error> {
        let p = padded_len(xs.len());
        let mut data = Vec::new();
        data.try_reserve_exact(p)
            .map_err(|source| Error::Allocation { needed: p, source })?;
        data.extend_from_slice(xs);
        data.resize(p, 0);
        Ok(WorkingBuffer {
            data,
            logical_len: xs.len(),
        })
    }

    pub fn padded_len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Drops the padding and returns the logical positions.
    pub fn into_logical(mut self) -> Vec<i32> {
        self.data.truncate(self.logical_len);
        self.data
    }
}
