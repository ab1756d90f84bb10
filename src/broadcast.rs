// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Broadcaster** - *Cyclic Recycling Rule*
//!
//! Shared index arithmetic for one vectorised call. Every input vector (or
//! set of matrix rows) is cyclically extended to the longest input's length:
//! output position `i` reads input element `i % len`. Lengths need not divide
//! the output length evenly; silent cyclic extension is the documented
//! contract, not an error.

/// Output length of one vectorised call.
///
/// `max(lengths)`, except that any zero-length input collapses the whole
/// call to an empty output.
#[inline(always)]
pub fn broadcast_len(lengths: &[usize]) -> usize {
    if lengths.iter().any(|&len| len == 0) {
        return 0;
    }
    lengths.iter().copied().max().unwrap_or(0)
}

/// Recycled element access: the input element feeding output position `i`.
#[inline(always)]
pub fn cycled<T: Copy>(v: &[T], i: usize) -> T {
    v[i % v.len()]
}

/// Recycled row access into a row-major flattened matrix with `rows` rows
/// of `cols` columns each.
#[inline(always)]
pub fn cycled_row<T>(flat: &[T], rows: usize, cols: usize, i: usize) -> &[T] {
    let row = i % rows;
    &flat[row * cols..(row + 1) * cols]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_of_lengths() {
        assert_eq!(broadcast_len(&[3, 1]), 3);
        assert_eq!(broadcast_len(&[2, 5, 4]), 5);
        assert_eq!(broadcast_len(&[1]), 1);
    }

    #[test]
    fn zero_length_collapses_call() {
        assert_eq!(broadcast_len(&[0, 7]), 0);
        assert_eq!(broadcast_len(&[4, 0, 2]), 0);
        assert_eq!(broadcast_len(&[]), 0);
    }

    #[test]
    fn non_divisor_cycling() {
        let v = [10.0, 20.0];
        let picked: Vec<f64> = (0..5).map(|i| cycled(&v, i)).collect();
        assert_eq!(picked, vec![10.0, 20.0, 10.0, 20.0, 10.0]);
    }

    #[test]
    fn row_cycling() {
        // two rows, three columns
        let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(cycled_row(&m, 2, 3, 0), &[1.0, 2.0, 3.0]);
        assert_eq!(cycled_row(&m, 2, 3, 1), &[4.0, 5.0, 6.0]);
        assert_eq!(cycled_row(&m, 2, 3, 2), &[1.0, 2.0, 3.0]);
    }
}
