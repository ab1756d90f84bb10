// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Half-Normal Distribution** - *Vectorised Kernels*
//!
//! Density, cdf, quantile and sampling for the half-normal distribution with
//! scale `σ`: the distribution of `|Z|·σ` for standard-normal `Z`. Support is
//! `x ≥ 0`; queries below the support are exact zeros. A NaN in `x` (or the
//! quantile's `p`) propagates silently, even when paired with an invalid `σ`;
//! `σ ≤ 0` is a parameter violation reported as NaN plus the call's
//! aggregated diagnostic.

use minarrow::Vec64;
use rand::Rng;

use crate::broadcast::{broadcast_len, cycled};
use crate::diagnostics::Eval;
use crate::distributions::{
    adapt_probabilities, complement_in_place, eval_recycled, ln_in_place,
};
use crate::special::SpecialFunctions;

/// Half-normal density, elementwise over recycled `x` and `sigma`.
pub fn half_normal_pdf<B: SpecialFunctions>(
    x: &[f64],
    sigma: &[f64],
    log_prob: bool,
    backend: &B,
) -> Eval {
    let nmax = broadcast_len(&[x.len(), sigma.len()]);
    if nmax == 0 {
        return Eval::empty();
    }
    let (mut values, invalid) = eval_recycled(nmax, |i| {
        let xi = cycled(x, i);
        let si = cycled(sigma, i);
        if xi.is_nan() || si.is_nan() {
            return (xi + si, false);
        }
        if si <= 0.0 {
            return (f64::NAN, true);
        }
        if xi < 0.0 {
            return (0.0, false);
        }
        (2.0 * backend.normal_pdf(xi, 0.0, si), false)
    });
    if log_prob {
        ln_in_place(&mut values);
    }
    Eval::new(values, invalid)
}

/// Half-normal cdf `P(X ≤ x)`, elementwise over recycled `x` and `sigma`.
///
/// The upper tail is `1 - lower` computed after the lower-tail value; the
/// log scale is applied last.
pub fn half_normal_cdf<B: SpecialFunctions>(
    x: &[f64],
    sigma: &[f64],
    lower_tail: bool,
    log_prob: bool,
    backend: &B,
) -> Eval {
    let nmax = broadcast_len(&[x.len(), sigma.len()]);
    if nmax == 0 {
        return Eval::empty();
    }
    let (mut values, invalid) = eval_recycled(nmax, |i| {
        let xi = cycled(x, i);
        let si = cycled(sigma, i);
        if xi.is_nan() || si.is_nan() {
            return (xi + si, false);
        }
        if si <= 0.0 {
            return (f64::NAN, true);
        }
        if xi < 0.0 {
            return (0.0, false);
        }
        (2.0 * backend.normal_cdf(xi, 0.0, si) - 1.0, false)
    });
    if !lower_tail {
        complement_in_place(&mut values);
    }
    if log_prob {
        ln_in_place(&mut values);
    }
    Eval::new(values, invalid)
}

/// Half-normal quantile, elementwise over recycled `p` and `sigma`.
///
/// `p` is adapted before evaluation (back from log scale, then to the lower
/// tail); an adapted `p` outside `[0, 1]` is a parameter violation.
pub fn half_normal_quantile<B: SpecialFunctions>(
    p: &[f64],
    sigma: &[f64],
    lower_tail: bool,
    log_prob: bool,
    backend: &B,
) -> Eval {
    let nmax = broadcast_len(&[p.len(), sigma.len()]);
    if nmax == 0 {
        return Eval::empty();
    }
    let adapted = adapt_probabilities(p, lower_tail, log_prob);
    let (values, invalid) = eval_recycled(nmax, |i| {
        let pi = cycled(&adapted, i);
        let si = cycled(sigma, i);
        if pi.is_nan() || si.is_nan() {
            return (pi + si, false);
        }
        if si <= 0.0 || !(0.0..=1.0).contains(&pi) {
            return (f64::NAN, true);
        }
        (backend.normal_quantile((pi + 1.0) / 2.0, 0.0, si), false)
    });
    Eval::new(values, invalid)
}

/// Draws `n` half-normal variates with recycled scales, in ascending index
/// order. Positions with an invalid `σ` yield NaN and consume no draw.
pub fn half_normal_sample<B, R>(n: usize, sigma: &[f64], backend: &B, rng: &mut R) -> Eval
where
    B: SpecialFunctions,
    R: Rng + ?Sized,
{
    if n == 0 || sigma.is_empty() {
        return Eval::empty();
    }
    let mut values = Vec64::with_capacity(n);
    let mut invalid = 0usize;
    for i in 0..n {
        let si = cycled(sigma, i);
        if si.is_nan() || si <= 0.0 {
            values.push(f64::NAN);
            invalid += 1;
        } else {
            values.push(backend.normal_sample(rng).abs() * si);
        }
    }
    Eval::new(values, invalid)
}
