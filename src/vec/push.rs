// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T, const N: usize> FixedVec<T, N> {
    /// Appends `value` if not full; returns [`Error::Full`] otherwise.
    ///
    /// On error `value` is dropped; use
    /// [`push_within_capacity`](FixedVec::push_within_capacity) to get it back.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.push_within_capacity(value).map_err(|_| Error::Full)
    }

    /// Appends `value` if not full; otherwise hands `value` back unchanged.
    #[inline]
    pub fn push_within_capacity(&mut self, value: T) -> Result<(), T> {
        if self.len == N {
            return Err(value);
        }
        // SAFETY: `len < N`.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends `value` if not full; if at capacity, drops it and returns `false`.
    #[inline]
    #[must_use]
    pub fn push_truncated(&mut self, value: T) -> bool {
        self.push_within_capacity(value).is_ok()
    }

    /// Constructs the value returned by `f` directly in the slot past the last
    /// element and returns a reference to it.
    ///
    /// Returns [`Error::Full`] without calling `f` if the vector is full. If `f`
    /// panics, the vector is unchanged.
    #[inline]
    pub fn emplace_back_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(Error::Full);
        }
        let index = self.len;
        // SAFETY: `len < N`; `len` is only bumped once `f` has returned.
        unsafe { self.push_unchecked(f()) };
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: Before decrementing, all elements in `buf[..old_len]` were
        // initialized by invariant, so `buf[self.len]` still holds a live `T`.
        Some(unsafe { self.take_at(self.len) })
    }
}
