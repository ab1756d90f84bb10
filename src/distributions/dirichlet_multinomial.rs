// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Dirichlet-Multinomial Distribution** - *Log-Space PMF Kernel*
//!
//! Compound multinomial with Dirichlet-distributed category probabilities.
//! Observations and concentration parameters arrive as row-major flattened
//! matrices; rows recycle independently against the size vector. The pmf is
//! computed directly in log space from `ln Γ` terms and exponentiated only
//! when natural scale is requested.
//!
//! Structural contract violations (fewer than two categories, observation
//! and concentration column counts differing, a flattened slice that is not
//! a whole number of rows) abort the call before any element is computed.

use crate::broadcast::{broadcast_len, cycled, cycled_row};
use crate::diagnostics::Eval;
use crate::distributions::{eval_recycled, is_nonneg_integer};
use crate::errors::KernelError;
use crate::special::SpecialFunctions;

/// Absolute tolerance for the row-sum vs. size consistency check.
const SUM_TOL: f64 = 1e-8;

/// Dirichlet-multinomial pmf over recycled observation rows, sizes and
/// concentration rows.
///
/// `x` and `alpha` are row-major flattened matrices with `x_cols` and
/// `alpha_cols` columns. Per position: a non-positive (or NaN) recycled `α`
/// is a parameter violation (NaN plus the aggregated diagnostic); an
/// observation row containing anything but nonnegative integers is a support
/// violation (`0`, or `-inf` on the log scale, silent); a row whose sum
/// disagrees with the recycled size beyond `1e-8` is a parameter violation.
pub fn dirichlet_multinomial_pmf<B: SpecialFunctions>(
    x: &[f64],
    x_cols: usize,
    size: &[f64],
    alpha: &[f64],
    alpha_cols: usize,
    log_prob: bool,
    backend: &B,
) -> Result<Eval, KernelError> {
    let k = x_cols.min(alpha_cols);
    if k < 2 {
        return Err(KernelError::InvalidArguments(
            "dirichlet_multinomial_pmf: need at least 2 categories".into(),
        ));
    }
    if x_cols != alpha_cols {
        return Err(KernelError::LengthMismatch(format!(
            "dirichlet_multinomial_pmf: observation columns ({}) != concentration columns ({})",
            x_cols, alpha_cols
        )));
    }
    if x.len() % x_cols != 0 {
        return Err(KernelError::LengthMismatch(format!(
            "dirichlet_multinomial_pmf: observation length {} is not a multiple of {} columns",
            x.len(),
            x_cols
        )));
    }
    if alpha.len() % alpha_cols != 0 {
        return Err(KernelError::LengthMismatch(format!(
            "dirichlet_multinomial_pmf: concentration length {} is not a multiple of {} columns",
            alpha.len(),
            alpha_cols
        )));
    }

    let x_rows = x.len() / x_cols;
    let alpha_rows = alpha.len() / alpha_cols;
    let nmax = broadcast_len(&[x_rows, alpha_rows, size.len()]);
    if nmax == 0 {
        return Ok(Eval::empty());
    }

    let (mut values, invalid) = eval_recycled(nmax, |i| {
        let xr = cycled_row(x, x_rows, x_cols, i);
        let ar = cycled_row(alpha, alpha_rows, alpha_cols, i);
        let ni = cycled(size, i);

        if ar.iter().any(|&aj| !(aj > 0.0)) {
            return (f64::NAN, true);
        }
        if xr.iter().any(|&xj| !is_nonneg_integer(xj)) {
            return (f64::NEG_INFINITY, false);
        }
        let sum_x: f64 = xr.iter().sum();
        if !((sum_x - ni).abs() < SUM_TOL) {
            return (f64::NAN, true);
        }

        let sum_alpha: f64 = ar.iter().sum();
        let mut lp = backend.ln_gamma(ni + 1.0) + backend.ln_gamma(sum_alpha)
            - backend.ln_gamma(ni + sum_alpha);
        for j in 0..k {
            lp += backend.ln_gamma(xr[j] + ar[j])
                - backend.ln_gamma(xr[j] + 1.0)
                - backend.ln_gamma(ar[j]);
        }
        (lp, false)
    });

    if !log_prob {
        for v in values.iter_mut() {
            *v = v.exp();
        }
    }
    Ok(Eval::new(values, invalid))
}
