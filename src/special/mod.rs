// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Special Functions** - *Injected Capability Set*
//!
//! The distribution kernels never call a special-function library directly;
//! they go through [`SpecialFunctions`], an explicit capability set passed
//! into every operation. Any backend satisfying the mathematical contract
//! (correct values over the stated domains, NaN propagation) is
//! substitutable. [`ScalarBackend`] is the canonical implementation over
//! `statrs` scalars.

pub mod scalar;

use rand::Rng;
use rand_distr::{Distribution, Poisson, StandardNormal};

/// Capability set consumed by the distribution kernels.
///
/// Required methods cover the normal and Poisson primitives plus `ln Γ`;
/// the sampling methods are provided once over `rand`/`rand_distr` and
/// take an explicit generator handle.
pub trait SpecialFunctions: Sync {
    /// `ln Γ(x)`.
    fn ln_gamma(&self, x: f64) -> f64;

    /// Normal density at `x`.
    fn normal_pdf(&self, x: f64, mean: f64, sd: f64) -> f64;

    /// Normal cdf `P(X ≤ x)`.
    fn normal_cdf(&self, x: f64, mean: f64, sd: f64) -> f64;

    /// Normal quantile with `qnorm` edge conventions.
    fn normal_quantile(&self, p: f64, mean: f64, sd: f64) -> f64;

    /// Poisson pmf at integer-valued `x`.
    fn poisson_pmf(&self, x: f64, lambda: f64) -> f64;

    /// Poisson cdf `P(X ≤ x)` with floor semantics.
    fn poisson_cdf(&self, x: f64, lambda: f64) -> f64;

    /// Smallest integer `k` with `P(X ≤ k) ≥ p`.
    fn poisson_quantile(&self, p: f64, lambda: f64) -> f64;

    /// One standard-normal draw.
    fn normal_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.sample(StandardNormal)
    }

    /// One Poisson draw with the given rate; NaN when the rate is not a
    /// valid `Poisson` parameter.
    fn poisson_sample<R: Rng + ?Sized>(&self, rng: &mut R, lambda: f64) -> f64 {
        match Poisson::new(lambda) {
            Ok(dist) => dist.sample(rng),
            Err(_) => f64::NAN,
        }
    }

    /// One uniform draw on `[0, 1)`.
    fn uniform_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random()
    }
}

/// Canonical scalar backend over `statrs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarBackend;

impl SpecialFunctions for ScalarBackend {
    #[inline(always)]
    fn ln_gamma(&self, x: f64) -> f64 {
        statrs::function::gamma::ln_gamma(x)
    }

    #[inline(always)]
    fn normal_pdf(&self, x: f64, mean: f64, sd: f64) -> f64 {
        scalar::normal_pdf_scalar(x, mean, sd)
    }

    #[inline(always)]
    fn normal_cdf(&self, x: f64, mean: f64, sd: f64) -> f64 {
        scalar::normal_cdf_scalar(x, mean, sd)
    }

    #[inline(always)]
    fn normal_quantile(&self, p: f64, mean: f64, sd: f64) -> f64 {
        scalar::normal_quantile_scalar(p, mean, sd)
    }

    #[inline(always)]
    fn poisson_pmf(&self, x: f64, lambda: f64) -> f64 {
        scalar::poisson_pmf_scalar(x, lambda)
    }

    #[inline(always)]
    fn poisson_cdf(&self, x: f64, lambda: f64) -> f64 {
        scalar::poisson_cdf_scalar(x, lambda)
    }

    #[inline(always)]
    fn poisson_quantile(&self, p: f64, lambda: f64) -> f64 {
        scalar::poisson_quantile_scalar(p, lambda)
    }
}
