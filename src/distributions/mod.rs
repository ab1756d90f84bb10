// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Distributions** - *Vectorised Kernel Modules*
//!
//! One module per distribution family. Every public operation broadcasts its
//! inputs by cyclic recycling, evaluates elementwise, and returns an
//! [`Eval`](crate::diagnostics::Eval) carrying the output vector and the
//! aggregated call status.

pub mod dirichlet_multinomial;
pub mod half_normal;
pub mod zero_inflated_poisson;

use minarrow::Vec64;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Result of one broadcast position: the value and whether it was a
/// parameter violation.
pub(crate) type Cell = (f64, bool);

/// Evaluates `body` over every broadcast position in parallel, preserving
/// ascending index order, and counts the parameter-violating positions.
pub(crate) fn eval_recycled<F>(nmax: usize, body: F) -> (Vec64<f64>, usize)
where
    F: Fn(usize) -> Cell + Send + Sync,
{
    let cells: Vec<Cell> = (0..nmax).into_par_iter().map(body).collect();
    let mut out = Vec64::with_capacity(nmax);
    let mut invalid = 0usize;
    for (value, bad) in cells {
        out.push(value);
        invalid += usize::from(bad);
    }
    (out, invalid)
}

/// Logs every value in place. Applied after natural-scale evaluation when
/// log-scale output is requested.
pub(crate) fn ln_in_place(values: &mut Vec64<f64>) {
    for v in values.iter_mut() {
        *v = v.ln();
    }
}

/// Replaces every value with `1 - v`. Applied after lower-tail evaluation
/// when the upper tail is requested.
pub(crate) fn complement_in_place(values: &mut Vec64<f64>) {
    for v in values.iter_mut() {
        *v = 1.0 - *v;
    }
}

/// Normalises a quantile probability vector before evaluation: back from log
/// scale first, then to the lower tail.
pub(crate) fn adapt_probabilities(p: &[f64], lower_tail: bool, log_prob: bool) -> Vec64<f64> {
    let mut adapted = Vec64::with_capacity(p.len());
    for &pi in p {
        let mut v = if log_prob { pi.exp() } else { pi };
        if !lower_tail {
            v = 1.0 - v;
        }
        adapted.push(v);
    }
    adapted
}

/// Exact nonnegative-integer test used by the discrete supports. NaN and
/// infinities fail it.
#[inline(always)]
pub(crate) fn is_nonneg_integer(x: f64) -> bool {
    x.is_finite() && x >= 0.0 && x.floor() == x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_preserves_order_and_counts() {
        let (out, invalid) = eval_recycled(5, |i| {
            if i == 2 {
                (f64::NAN, true)
            } else {
                (i as f64, false)
            }
        });
        assert_eq!(invalid, 1);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 1.0);
        assert!(out[2].is_nan());
        assert_eq!(out[4], 4.0);
    }

    #[test]
    fn probability_adapter_order() {
        // exp first, then complement
        let p = [0.25_f64.ln()];
        let adapted = adapt_probabilities(&p, false, true);
        assert!((adapted[0] - 0.75).abs() < 1e-15);
    }

    #[test]
    fn integer_support_test() {
        assert!(is_nonneg_integer(0.0));
        assert!(is_nonneg_integer(7.0));
        assert!(!is_nonneg_integer(1.5));
        assert!(!is_nonneg_integer(-1.0));
        assert!(!is_nonneg_integer(f64::NAN));
        assert!(!is_nonneg_integer(f64::INFINITY));
    }
}
