// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

// Core imports
use core::ptr;

impl<T, const N: usize> FixedVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`, moved rather than cloned.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfBounds);
        }

        let tail_len = len - at;
        let mut other = Self::new();
        self.len = at;
        // SAFETY: `[at, len)` is live in `self` and no longer counted by its
        // `len`; `other` is empty with room for `tail_len <= N` elements.
        unsafe { ptr::copy_nonoverlapping(self.as_ptr().add(at), other.as_mut_ptr(), tail_len) };
        other.len = tail_len;

        Ok(other)
    }
}
