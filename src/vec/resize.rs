// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{FixedVec, slots::Gap},
};

// Core imports
use core::ptr;

impl<T, const N: usize> FixedVec<T, N> {
    /// Shrinks to `new_len` if `new_len < len`, dropping the removed tail in order;
    /// otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        // Shrink first: a panicking destructor must not expose dropped slots.
        self.len = new_len;
        // SAFETY: `[new_len, len)` was live and is no longer counted by `len`.
        // Dropping it as one slice keeps dropping the rest after a panic.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.as_mut_ptr().add(new_len),
                len - new_len,
            ));
        }
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Returns [`Error::Full`] if `new_len > N`, leaving the vector unchanged.
    /// If `T::clone` panics while growing, the vector keeps its original contents.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > N {
            return Err(Error::Full);
        }
        let len = self.len;
        // SAFETY: `len + (new_len - len) == new_len <= N`.
        let mut gap = unsafe { Gap::open(self, len, new_len - len) };
        while gap.remaining() > 1 {
            gap.fill(value.clone());
        }
        gap.fill(value);
        gap.commit();
        Ok(())
    }

    /// Resizes to `new_len`, filling with values produced by `f` when growing.
    ///
    /// Returns [`Error::Full`] if `new_len > N`, leaving the vector unchanged.
    #[inline]
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > N {
            return Err(Error::Full);
        }
        let len = self.len;
        // SAFETY: `len + (new_len - len) == new_len <= N`.
        let mut gap = unsafe { Gap::open(self, len, new_len - len) };
        while gap.remaining() > 0 {
            gap.fill(f());
        }
        gap.commit();
        Ok(())
    }
}
