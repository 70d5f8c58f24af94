// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{FixedVec, slots::Gap},
};

impl<T, const N: usize> Extend<T> for FixedVec<T, N> {
    /// Appends items until the vector is full; the rest of the iterator is not consumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            // SAFETY: `take(remaining)` keeps `len < N` before every push.
            unsafe { self.push_unchecked(item) };
        }
    }
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Appends clones of `src` if they all fit; otherwise no-op and returns
    /// [`Error::Full`].
    ///
    /// If `T::clone` panics, the vector keeps its original contents.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let len = self.len;
        self.insert_from_slice(len, src)
    }

    /// Appends clones of as many elements of `src` as fit and returns how many were appended.
    #[inline]
    #[must_use]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = self.spare_capacity().min(src.len());
        let len = self.len;
        // SAFETY: `len + take <= N`.
        let mut gap = unsafe { Gap::open(self, len, take) };
        for item in &src[..take] {
            gap.fill(item.clone());
        }
        gap.commit()
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// Semantics:
    /// - All-or-nothing:
    ///   - If the iterator yields at most `spare_capacity()` items, they are
    ///     appended in order and `Ok(())` is returned.
    ///   - If it yields more than `spare_capacity()`, this returns
    ///     `Err(Error::Full)` and `self` is left unchanged; the items taken so
    ///     far are dropped.
    /// - The source iterator may be partially consumed on error.
    #[inline]
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let spare = N - self.len;
        let mut iter = iter.into_iter();

        // Stage the items in the spare slots, hidden behind `len` until the
        // iterator is known to fit.
        let len = self.len;
        // SAFETY: `len + spare == N`.
        let mut gap = unsafe { Gap::open(self, len, spare) };
        while gap.remaining() > 0 {
            match iter.next() {
                Some(item) => gap.fill(item),
                None => break,
            }
        }
        if gap.remaining() == 0 && iter.next().is_some() {
            // Dropping the uncommitted gap discards the staged items.
            return Err(Error::Full);
        }
        gap.commit();
        Ok(())
    }
}
