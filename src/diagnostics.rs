// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Diagnostics** - *Per-Call Evaluation Result*
//!
//! Typed outcome of one vectorised kernel call. Parameter violations do not
//! abort evaluation; the offending positions carry NaN and the call reports
//! a single aggregated diagnostic, however many positions were affected.
//! Support violations (a pmf query outside the support) are ordinary zero
//! results and never appear here.

use minarrow::FloatArray;
use minarrow::Vec64;

/// Aggregated numeric outcome of one vectorised call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalStatus {
    /// Every position evaluated cleanly.
    Ok,
    /// `invalid` positions hit a parameter violation and hold NaN.
    PartialInvalid {
        /// Number of NaN-carrying positions.
        invalid: usize,
    },
}

/// Output vector plus the call-level status.
#[derive(Debug, Clone)]
pub struct Eval {
    /// Elementwise results, one per broadcast position.
    pub values: FloatArray<f64>,
    /// Aggregated diagnostic state for the whole call.
    pub status: EvalStatus,
}

impl Eval {
    /// Wraps a finished output buffer, deriving the status from the count of
    /// parameter-violating positions.
    pub fn new(values: Vec64<f64>, invalid: usize) -> Self {
        let status = if invalid == 0 {
            EvalStatus::Ok
        } else {
            EvalStatus::PartialInvalid { invalid }
        };
        Self {
            values: FloatArray::from_vec64(values, None),
            status,
        }
    }

    /// Empty result for zero-length broadcasts.
    pub fn empty() -> Self {
        Self {
            values: FloatArray::from_slice(&[]),
            status: EvalStatus::Ok,
        }
    }

    /// The single aggregated warning for this call, if any.
    ///
    /// At most one message per call regardless of how many positions were
    /// invalid.
    pub fn warning(&self) -> Option<&'static str> {
        match self.status {
            EvalStatus::Ok => None,
            EvalStatus::PartialInvalid { .. } => Some("NaNs produced"),
        }
    }
}
