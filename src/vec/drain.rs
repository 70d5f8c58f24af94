// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{iter::IntoIter, vec::FixedVec};

// Core imports
use core::{
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
    ptr,
};

/// Owned iterator returned by [`FixedVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Internally wraps an [`IntoIter`] over a temporary `FixedVec` the drained
///   elements were moved into. Items not yielded are dropped with the iterator.
pub struct Drain<'a, T, const N: usize> {
    _parent: &'a mut FixedVec<T, N>,
    iter: IntoIter<T, N>,
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}
impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.iter.nth_back(n)
    }
}
impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> FixedVec<T, N> {
    /// Drains the specified range of elements and returns them as an iterator.
    ///
    /// Elements in `range` are moved out into a temporary `FixedVec` and
    /// yielded by value. The remainder of the vector is shifted left
    /// immediately, so the parent is consistent even if the iterator is leaked.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity_vec::FixedVec;
    /// let mut v: FixedVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: FixedVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.checked_add(1).unwrap_or_else(|| panic!("drain range start overflows usize")),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.checked_add(1).unwrap_or_else(|| panic!("drain range end overflows usize")),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        let range_len = end - start;
        let mut tmp = Self::new();
        self.len = start;
        // SAFETY: `[start, end)` is live and no longer counted by `self.len`;
        // `tmp` is empty. The tail then slides over the moved-out slots.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr().add(start), tmp.as_mut_ptr(), range_len);
            tmp.len = range_len;
            self.relocate(end, start, len - end);
        }
        self.len = len - range_len;

        Drain {
            _parent: self,
            iter: tmp.into_iter(),
        }
    }
}
