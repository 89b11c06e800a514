//! Index math for the scan tree, independent of how levels are dispatched.

use crate::step::{div_step, mult_step};

/// One level of the scan tree, identified by its pair stride.
///
/// At stride `s = 2^d` the active nodes are spaced `2 * s` elements apart,
/// so a buffer of padded length `P` has `P / (2 * s)` of them. Within a
/// node's span the left child sits at offset `s - 1` and the right child at
/// offset `2 * s - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Level {
    stride: usize,
}

impl Level {
    pub fn with_stride(stride: usize) -> Self {
        debug_assert!(stride.is_power_of_two());
        Level { stride }
    }

    pub fn stride(self) -> usize {
        self.stride
    }

    /// Distance between the base indices of adjacent active nodes.
    pub fn node_spacing(self) -> usize {
        self.stride * 2
    }

    /// Offset of a node's left child within its span.
    pub fn left_offset(self) -> usize {
        self.stride - 1
    }

    /// Offset of a node's right child within its span.
    pub fn right_offset(self) -> usize {
        self.stride * 2 - 1
    }

    /// Number of active nodes in a buffer of the given padded length.
    pub fn node_count(self, padded_len: usize) -> usize {
        padded_len / self.node_spacing()
    }
}

/// Levels visited by the upsweep, in order: strides 1, 2, ... `padded_len / 2`.
///
/// Empty for padded lengths 0 and 1, where no pair exists to combine.
pub fn upsweep_levels(padded_len: usize) -> impl Iterator<Item = Level> {
    mult_step(1, 2)
        .take_while(move |&s| s * 2 <= padded_len)
        .map(Level::with_stride)
}

/// Levels visited by the downsweep, in order: strides `padded_len / 2`, ... 2, 1.
pub fn downsweep_levels(padded_len: usize) -> impl Iterator<Item = Level> {
    div_step(padded_len / 2, 2)
        .take_while(|&s| s > 0)
        .map(Level::with_stride)
}
