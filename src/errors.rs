// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Call-Aborting Kernel Errors*
//!
//! Errors for kernel calls that cannot produce an output vector at all.
//! Only structural contract violations (shape mismatches, too few categories)
//! abort a call; numeric domain problems never do. Those are reported through
//! [`crate::diagnostics::EvalStatus`] as sentinel values plus one aggregated
//! diagnostic per call.

use core::fmt;
use std::error::Error;

/// Error type for vectorised kernel calls.
///
/// Each variant carries a contextual message naming the offending function
/// and arguments.
#[derive(Debug, Clone)]
pub enum KernelError {
    /// Matrix/vector shape mismatch between operands.
    LengthMismatch(String),

    /// Invalid arguments provided to a kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}
