// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedVec`](crate::FixedVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Items it never yields are
//!   dropped with it.
//! - `&FixedVec` and `&mut FixedVec` iterate as slices.
//! - `FromIterator` truncates at capacity.

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::{fmt, iter::FusedIterator, ptr};

/// Owned iterator returned by `FixedVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // `v.len` is kept at 0; `[front, back)` are the live slots.
    v: FixedVec<T, N>,
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the remaining items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live and `back <= N`.
        unsafe { core::slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front) }
    }

    /// Returns the remaining items as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.back - self.front;
        // SAFETY: `[front, back)` are live and `back <= N`.
        unsafe { core::slice::from_raw_parts_mut(self.v.as_mut_ptr().add(self.front), len) }
    }

    // Drops `count <= back - front` items from the front without yielding them.
    fn drop_front(&mut self, count: usize) {
        let start = self.front;
        self.front += count;
        // SAFETY: the slots were live and are now outside `[front, back)`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.v.as_mut_ptr().add(start), count));
        }
    }

    // Drops `count <= back - front` items from the back without yielding them.
    fn drop_back(&mut self, count: usize) {
        self.back -= count;
        // SAFETY: the slots were live and are now outside `[front, back)`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.v.as_mut_ptr().add(self.back), count));
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside `[front, back)`, so the slot is live.
            Some(unsafe { self.v.take_at(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        self.drop_front(n.min(rem));
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was inside `[front, back)`, so the slot is live.
            Some(unsafe { self.v.take_at(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        self.drop_back(n.min(rem));
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        self.drop_front(rem);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The iterator owns the live slots from here on.
        self.len = 0;
        IntoIter { front: 0, back, v: self }
    }
}

impl<T, const N: usize> FromIterator<T> for FixedVec<T, N> {
    /// Collecting into `FixedVec<T, N>` takes at most the first `N` elements from the iterator and
    /// does not consume any further elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
