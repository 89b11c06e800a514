//! Stream compaction: remove zero-valued elements, preserving relative
//! order, by scattering through an exclusive scan of the non-zero mask.

use crate::buffer::WorkingBuffer;
use crate::error::Error;
use itertools::Itertools;
use scan_tools::blelloch;

/// Elementwise predicate mask: 1 where the element is non-zero, else 0.
pub fn map_nonzero(xs: &[i32]) -> Vec<i32> {
    xs.iter().map(|&x| (x != 0) as i32).collect_vec()
}

/// Writes each kept element to the destination the index array assigns it.
/// Dropped positions get no output slot.
pub fn scatter(xs: &[i32], mask: &[i32], index: &[i32], out: &mut [i32]) {
    for (i, &x) in xs.iter().enumerate() {
        if mask[i] == 1 {
            out[index[i] as usize] = x;
        }
    }
}

/// Removes zero-valued elements from `xs`.
///
/// Returns the kept elements in their original relative order together with
/// their count. Order is preserved because destination indices are strictly
/// increasing across kept positions: the exclusive prefix sum of the mask is
/// non-decreasing and steps by exactly 1 at each kept element.
///
/// The scan runs on an independent padded copy of the mask. The kept count
/// is the last padded index entry plus the last padded mask entry as it was
/// before the scan, so the pre-scan mask must survive the in-place scan.
pub fn compact(xs: &[i32]) -> Result<(Vec<i32>, usize), Error> {
    let mask = map_nonzero(xs);

    let mut buffer = WorkingBuffer::padded(&mask)?;
    let p = buffer.padded_len();
    blelloch::exclusive_scan_in_place(buffer.as_mut_slice());
    let index = buffer.as_slice();

    // Padding positions hold mask value 0, so the last pre-scan mask entry
    // is only non-trivial when the logical size fills the padded buffer.
    let last_mask = if mask.len() == p { mask[p - 1] } else { 0 };
    let count = (index[p - 1] + last_mask) as usize;

    let mut out = vec![0i32; count];
    scatter(xs, &mask, index, &mut out);
    Ok((out, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_hc::Hc128Rng;

    const SEED: &[u8; 32] = b"Fb4qN7xWc2vKm9sRt5jYh8dLg3pZa6eT";

    #[test]
    fn drops_zeros_and_keeps_order() {
        let (out, count) = compact(&[1, 0, 2, 0, 3]).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(count, 3);
    }

    #[test]
    fn all_zero_input_compacts_to_nothing() {
        let (out, count) = compact(&[0, 0, 0]).unwrap();
        assert!(out.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn single_kept_element() {
        let (out, count) = compact(&[5]).unwrap();
        assert_eq!(out, vec![5]);
        assert_eq!(count, 1);
    }

    #[test]
    fn all_nonzero_input_is_a_no_op() {
        let xs = [4, -1, 7, 2, -9, 3];
        let (out, count) = compact(&xs).unwrap();
        assert_eq!(out, xs);
        assert_eq!(count, xs.len());
    }

    #[test]
    fn empty_input() {
        let (out, count) = compact(&[]).unwrap();
        assert!(out.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn count_includes_a_kept_last_element_at_full_padding() {
        // Power-of-two length with a non-zero last element exercises the
        // pre-scan mask value at the final padded slot.
        let (out, count) = compact(&[0, 1, 0, 2, 0, 3, 0, 4]).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
        assert_eq!(count, 4);
    }

    #[test]
    fn map_nonzero_flags_negatives_too() {
        assert_eq!(map_nonzero(&[0, 3, -2, 0]), vec![0, 1, 1, 0]);
    }

    #[test]
    fn matches_filter_on_random_inputs() {
        let mut rng = Hc128Rng::from_seed(*SEED);
        for _ in 0..20 {
            let len = rng.gen_range(0..2000);
            let xs: Vec<i32> = (0..len).map(|_| rng.gen_range(-2..3)).collect();

            let expected: Vec<i32> = xs.iter().copied().filter(|&x| x != 0).collect();
            let (out, count) = compact(&xs).unwrap();
            assert_eq!(out, expected, "length {}", len);
            assert_eq!(count, expected.len());
        }
    }
}
