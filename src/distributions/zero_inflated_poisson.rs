// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Zero-Inflated Poisson Distribution** - *Vectorised Kernels*
//!
//! Mixture of a point mass at zero (weight `π`) and a Poisson with rate `λ`
//! (weight `1 − π`). The parameter predicate is exactly
//! `λ ≤ 0 ∨ π < 0 ∨ π > 1`: NaN parameters do not trip it and instead flow
//! through the primitives to a silent NaN result. Support violations
//! (negative, fractional or NaN `x`) are exact zeros with no diagnostic.

use minarrow::Vec64;
use rand::Rng;

use crate::broadcast::{broadcast_len, cycled};
use crate::diagnostics::Eval;
use crate::distributions::{
    adapt_probabilities, complement_in_place, eval_recycled, is_nonneg_integer, ln_in_place,
};
use crate::special::SpecialFunctions;

/// Parameter-violation predicate, kept literal so NaN slips through.
#[inline(always)]
fn params_invalid(lambda: f64, pi: f64) -> bool {
    lambda <= 0.0 || pi < 0.0 || pi > 1.0
}

/// Zero-inflated Poisson pmf, elementwise over recycled `x`, `lambda`, `pi`.
///
/// `pmf(0)` uses the closed form `π + (1 − π)e^{−λ}`.
pub fn zip_pmf<B: SpecialFunctions>(
    x: &[f64],
    lambda: &[f64],
    pi: &[f64],
    log_prob: bool,
    backend: &B,
) -> Eval {
    let nmax = broadcast_len(&[x.len(), lambda.len(), pi.len()]);
    if nmax == 0 {
        return Eval::empty();
    }
    let (mut values, invalid) = eval_recycled(nmax, |i| {
        let xi = cycled(x, i);
        let li = cycled(lambda, i);
        let pii = cycled(pi, i);
        if params_invalid(li, pii) {
            return (f64::NAN, true);
        }
        if !is_nonneg_integer(xi) {
            return (0.0, false);
        }
        if xi == 0.0 {
            (pii + (1.0 - pii) * (-li).exp(), false)
        } else {
            ((1.0 - pii) * backend.poisson_pmf(xi, li), false)
        }
    });
    if log_prob {
        ln_in_place(&mut values);
    }
    Eval::new(values, invalid)
}

/// Zero-inflated Poisson cdf `P(X ≤ x)`.
pub fn zip_cdf<B: SpecialFunctions>(
    x: &[f64],
    lambda: &[f64],
    pi: &[f64],
    lower_tail: bool,
    log_prob: bool,
    backend: &B,
) -> Eval {
    let nmax = broadcast_len(&[x.len(), lambda.len(), pi.len()]);
    if nmax == 0 {
        return Eval::empty();
    }
    let (mut values, invalid) = eval_recycled(nmax, |i| {
        let xi = cycled(x, i);
        let li = cycled(lambda, i);
        let pii = cycled(pi, i);
        if params_invalid(li, pii) {
            return (f64::NAN, true);
        }
        if xi < 0.0 {
            return (0.0, false);
        }
        (pii + (1.0 - pii) * backend.poisson_cdf(xi, li), false)
    });
    if !lower_tail {
        complement_in_place(&mut values);
    }
    if log_prob {
        ln_in_place(&mut values);
    }
    Eval::new(values, invalid)
}

/// Zero-inflated Poisson quantile.
///
/// Probabilities at or below the inflation mass `π` map to 0; above it the
/// residual mass is rescaled onto the Poisson component's quantile.
pub fn zip_quantile<B: SpecialFunctions>(
    p: &[f64],
    lambda: &[f64],
    pi: &[f64],
    lower_tail: bool,
    log_prob: bool,
    backend: &B,
) -> Eval {
    let nmax = broadcast_len(&[p.len(), lambda.len(), pi.len()]);
    if nmax == 0 {
        return Eval::empty();
    }
    let adapted = adapt_probabilities(p, lower_tail, log_prob);
    let (values, invalid) = eval_recycled(nmax, |i| {
        let ppi = cycled(&adapted, i);
        let li = cycled(lambda, i);
        let pii = cycled(pi, i);
        if params_invalid(li, pii) || ppi < 0.0 || ppi > 1.0 {
            return (f64::NAN, true);
        }
        if ppi < pii {
            (0.0, false)
        } else {
            (backend.poisson_quantile((ppi - pii) / (1.0 - pii), li), false)
        }
    });
    Eval::new(values, invalid)
}

/// Draws `n` zero-inflated Poisson variates with recycled parameters, in
/// ascending index order.
///
/// Each valid position consumes one uniform draw, plus one Poisson draw only
/// when the uniform lands in the Poisson component. Invalid positions yield
/// NaN and consume no draws.
pub fn zip_sample<B, R>(n: usize, lambda: &[f64], pi: &[f64], backend: &B, rng: &mut R) -> Eval
where
    B: SpecialFunctions,
    R: Rng + ?Sized,
{
    if n == 0 || lambda.is_empty() || pi.is_empty() {
        return Eval::empty();
    }
    let mut values = Vec64::with_capacity(n);
    let mut invalid = 0usize;
    for i in 0..n {
        let li = cycled(lambda, i);
        let pii = cycled(pi, i);
        if li.is_nan() || pii.is_nan() || params_invalid(li, pii) {
            values.push(f64::NAN);
            invalid += 1;
            continue;
        }
        let u = backend.uniform_sample(rng);
        if u < pii {
            values.push(0.0);
        } else {
            values.push(backend.poisson_sample(rng, li));
        }
    }
    Eval::new(values, invalid)
}
