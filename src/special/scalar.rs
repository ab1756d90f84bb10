// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Special Functions** - *Normal and Poisson Primitives*
//!
//! Scalar building blocks shared by the distribution kernels. Normal cdf and
//! quantile use the complementary error function for tail accuracy; the
//! Poisson cdf uses the regularised upper incomplete gamma identity
//! `P(X ≤ k) = Q(⌊k⌋ + 1, λ)` and the quantile inverts it with a
//! Cornish-Fisher seed plus a local integer search.

use statrs::function::erf::{erfc, erfc_inv};
use statrs::function::gamma::{gamma_ur, ln_gamma};

pub(crate) const SQRT_2: f64 = 1.4142135623730951;
pub(crate) const SQRT_2PI: f64 = 2.5066282746310002;

/// Absolute tolerance for the Poisson quantile cdf comparisons.
const QUANTILE_ABS_TOL: f64 = 1e-12;

/// Normal density at `x` with the given mean and standard deviation.
#[inline(always)]
pub fn normal_pdf_scalar(x: f64, mean: f64, sd: f64) -> f64 {
    let z = (x - mean) / sd;
    (-0.5 * z * z).exp() / (sd * SQRT_2PI)
}

/// Normal cdf via `erfc`, branched on the sign of `z` so both tails keep
/// full relative precision.
#[inline(always)]
pub fn normal_cdf_scalar(x: f64, mean: f64, sd: f64) -> f64 {
    let z = (x - mean) / (sd * SQRT_2);
    if z >= 0.0 {
        1.0 - 0.5 * erfc(z)
    } else {
        0.5 * erfc(-z)
    }
}

/// Normal quantile with `qnorm` edge conventions: `p = 0` gives `-inf`,
/// `p = 1` gives `+inf`, anything outside `[0, 1]` (or a non-positive `sd`)
/// gives NaN.
#[inline(always)]
pub fn normal_quantile_scalar(p: f64, mean: f64, sd: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) || !(sd > 0.0) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    mean + sd * (-SQRT_2 * erfc_inv(2.0 * p))
}

/// Poisson pmf at integer-valued `x`, computed in log space.
#[inline(always)]
pub fn poisson_pmf_scalar(x: f64, lambda: f64) -> f64 {
    (-lambda + x * lambda.ln() - ln_gamma(x + 1.0)).exp()
}

/// Poisson cdf `P(X ≤ x)` for real `x` (floor semantics).
#[inline(always)]
pub fn poisson_cdf_scalar(x: f64, lambda: f64) -> f64 {
    if x.is_nan() || lambda.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }
    if lambda.is_infinite() {
        return 0.0;
    }
    gamma_ur(x.floor() + 1.0, lambda)
}

/// Smallest integer `k` with `P(X ≤ k) ≥ p`, with `qpois` edge conventions
/// `p = 0 → 0` and `p = 1 → +inf`.
///
/// Seeds from a Cornish-Fisher expansion around the normal approximation,
/// then walks forward/backward until the defining inequality is tight.
pub fn poisson_quantile_scalar(p: f64, lambda: f64) -> f64 {
    if p.is_nan() || lambda.is_nan() {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 || lambda.is_infinite() {
        return f64::INFINITY;
    }

    let sigma = lambda.sqrt();
    let z = normal_quantile_scalar(p, 0.0, 1.0);
    let seed = lambda + sigma * (z + (z * z - 1.0) / (6.0 * sigma));
    let mut k = seed.floor().max(0.0);

    let max_k = (10.0 * lambda).ceil() + 1000.0;
    while poisson_cdf_scalar(k, lambda) + QUANTILE_ABS_TOL < p && k < max_k {
        k += 1.0;
    }
    while k > 0.0 && poisson_cdf_scalar(k - 1.0, lambda) >= p - QUANTILE_ABS_TOL {
        k -= 1.0;
    }
    k
}
