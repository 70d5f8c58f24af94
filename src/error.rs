// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedVec`.
//!
//! These errors report capacity and bounds conditions. Failures raised by an
//! element type itself (a panicking `Clone`, for instance) are not represented
//! here; they unwind through the container unchanged.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedVec`](crate::FixedVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The operation would need more than `N` live elements.
    ///
    /// Always reported before the vector is modified.
    Full,
    /// An index or position was outside the current logical bounds.
    OutOfBounds,
    /// An operation required `len == N`, which was not met.
    ///
    /// Currently used by [`FixedVec::try_into_array`](crate::FixedVec::try_into_array).
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}
