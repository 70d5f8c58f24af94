// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVec;

impl<T, const N: usize> FixedVec<T, N> {
    /// Returns a raw pointer to the start of the arena.
    ///
    /// Only the first `len` elements are initialized. Code that dereferences
    /// this pointer must not read from `ptr.add(i)` for any `i >= len`.
    ///
    /// The address is the same for every call as long as the vector itself is
    /// not moved: no operation relocates the arena.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    /// Returns a mutable raw pointer to the start of the arena.
    ///
    /// Only the first `len` elements are initialized. Writing beyond `len` does
    /// **not** update `len`, and such writes are not part of the logical
    /// contents of the `FixedVec`.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`. We have exclusive access via `&mut self`, so it is
        // sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Constructs from clones of at most `N` elements of `src`, truncating if necessary.
    #[inline]
    pub fn from_slice_truncated(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        let _ = v.extend_from_slice_truncated(src);
        v
    }

    /// Constructs from clones of at most `N` elements of `src`, truncating if necessary.
    ///
    /// Convenience wrapper over [`from_slice_truncated`](FixedVec::from_slice_truncated)
    /// for arrays.
    #[inline]
    pub fn from_array_truncated<const M: usize>(src: &[T; M]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_truncated(&src[..])
    }
}
