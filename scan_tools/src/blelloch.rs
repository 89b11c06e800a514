//! Work-efficient exclusive prefix sum (Blelloch scan).
//!
//! Two tree passes over a power-of-two-length buffer: the upsweep reduces
//! pairs into partial sums at power-of-two-spaced right positions, then the
//! root is zeroed and the downsweep swaps and propagates the partial sums so
//! each slot ends up holding the sum of everything to its left. Total work
//! is O(n) across O(log n) levels.
//!
//! Nodes within a level have disjoint read/write sets, so each level runs as
//! a parallel iteration over node spans. The join at the end of each level
//! is the full barrier the next level depends on: the downsweep reads values
//! the previous level wrote at a different offset.

use crate::tree;
use rayon::prelude::*;

/// Levels with fewer node spans than this run the whole level on the
/// current thread; splitting costs more than the adds it saves.
const MIN_NODES_PER_TASK: usize = 1 << 12;

/// In-place exclusive scan over a buffer whose length is a power of two
/// (or zero).
///
/// Afterwards `xs[0] == 0` and `xs[i]` equals the sum of the original
/// elements at positions `[0, i)`.
pub fn exclusive_scan_in_place(xs: &mut [i32]) {
    debug_assert!(
        xs.is_empty() || xs.len().is_power_of_two(),
        "scan buffer length must be a power of two, got {}",
        xs.len()
    );

    upsweep(xs);
    zero_root(xs);
    downsweep(xs);
}

/// Reduction phase: builds partial sums at the right edge of each node span.
pub fn upsweep(xs: &mut [i32]) {
    for level in tree::upsweep_levels(xs.len()) {
        let (left, right) = (level.left_offset(), level.right_offset());
        xs.par_chunks_exact_mut(level.node_spacing())
            .with_min_len(MIN_NODES_PER_TASK)
            .for_each(|node| node[right] += node[left]);
    }
}

/// Replaces the inclusive total at the root with the exclusive-scan seed.
pub fn zero_root(xs: &mut [i32]) {
    if let Some(root) = xs.last_mut() {
        *root = 0;
    }
}

/// Distribution phase: swaps each left child with its parent's value and
/// accumulates into the right child, walking the partial sums back down.
pub fn downsweep(xs: &mut [i32]) {
    for level in tree::downsweep_levels(xs.len()) {
        let (left, right) = (level.left_offset(), level.right_offset());
        xs.par_chunks_exact_mut(level.node_spacing())
            .with_min_len(MIN_NODES_PER_TASK)
            .for_each(|node| {
                let tmp = node[left];
                node[left] = node[right];
                node[right] += tmp;
            });
    }
}

/// Exclusive scan, sequential reference implementation.
pub fn exclusive_scan_seq(xs: &[i32]) -> Vec<i32> {
    let mut ys = Vec::with_capacity(xs.len());
    let mut accumulator = 0i32;
    for &x in xs {
        ys.push(accumulator);
        accumulator += x;
    }
    ys
}
