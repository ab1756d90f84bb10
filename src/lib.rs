// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Dist-Kernels** - *Vectorised Probability Distribution Kernels*
//!
//! Elementwise pmf/pdf, cdf, quantile and sampling kernels for the
//! half-normal, zero-inflated Poisson and Dirichlet-multinomial families,
//! evaluated over input and parameter vectors of possibly different lengths
//! under a cyclic recycling rule: output position `i` reads element
//! `i % len` of each input.
//!
//! ## Design
//!
//! - **Recycling**: [`broadcast`] holds the shared index arithmetic. The
//!   output length is the longest input's length; any empty input collapses
//!   the call to an empty output.
//! - **Diagnostics**: numeric problems never abort a call. Parameter
//!   violations produce NaN at the offending positions and one aggregated
//!   diagnostic per call in [`Eval`]'s status; out-of-support queries are
//!   ordinary zeros. Only structural shape violations return a
//!   [`KernelError`].
//! - **Special functions**: kernels are generic over the
//!   [`SpecialFunctions`] capability set; [`ScalarBackend`] is the canonical
//!   implementation. Sampling takes an explicit `rand::Rng` handle, drawn in
//!   ascending index order.
//!
//! ## Example
//!
//! ```
//! use dist_kernels::distributions::half_normal::half_normal_pdf;
//! use dist_kernels::ScalarBackend;
//!
//! // x has length 3, sigma length 2: sigma recycles as 1.0, 2.0, 1.0
//! let eval = half_normal_pdf(&[0.0, 1.0, 2.0], &[1.0, 2.0], false, &ScalarBackend);
//! assert_eq!(eval.values.len(), 3);
//! assert!(eval.warning().is_none());
//! ```

pub mod broadcast;
pub mod diagnostics;
pub mod distributions;
pub mod errors;
pub mod special;

pub use diagnostics::{Eval, EvalStatus};
pub use errors::KernelError;
pub use special::{ScalarBackend, SpecialFunctions};
