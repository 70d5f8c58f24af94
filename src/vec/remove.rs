// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T, const N: usize> FixedVec<T, N> {
    /// Drops the element at `index` in place and shifts the following elements
    /// one slot left.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`. On success returns
    /// `index`, which now addresses the element that followed the erased one
    /// (or equals `len()` if the erased element was the last), so erases can be
    /// chained.
    ///
    /// ```rust
    /// use fixed_capacity_vec::FixedVec;
    ///
    /// let mut v: FixedVec<i32, 6> = FixedVec::from([1, 2, 2, 3, 2, 4]);
    /// let mut i = 0;
    /// while i < v.len() {
    ///     i = if v[i] == 2 { v.erase(i).unwrap() } else { i + 1 };
    /// }
    /// assert_eq!(v, [1, 3, 4]);
    /// ```
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<usize, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfBounds);
        }
        // Hide the suffix while the destructor runs; a panicking drop leaks it.
        self.len = index;
        // SAFETY: `index < len`, so the slot is live; it is dropped exactly once
        // and then refilled by the relocation (or left past the new `len`).
        unsafe {
            self.destroy_at(index);
            self.relocate(index + 1, index, len - index - 1);
        }
        self.len = len - 1;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        // SAFETY: `index < len`, so `buf[index]` is live; the relocation then
        // fills the hole from the live suffix.
        let out = unsafe {
            let out = self.take_at(index);
            self.relocate(index + 1, index, len - index - 1);
            out
        };
        self.len = len - 1;
        Some(out)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`. Removing
    /// the last element avoids the move.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;
        // SAFETY: Before the decrement `index < old_len`, so `buf[index]` and
        // `buf[last]` are live; the hole at `index` is refilled from `last`.
        let out = unsafe {
            let out = self.take_at(index);
            self.relocate(last, index, usize::from(index != last));
            out
        };
        Some(out)
    }

    /// Fallible variant of [`remove`](FixedVec::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Fallible variant of [`swap_remove`](FixedVec::swap_remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfBounds)
    }

    /// Drops every live element, front to back, and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Error,
        testing::{Tracked, tracked_seq},
        vec::FixedVec,
    };

    #[test]
    fn test_erase_each_position() {
        for pos in 0..4 {
            let before = Tracked::live();
            let mut v: FixedVec<Tracked, 4> = FixedVec::from(tracked_seq::<4>(1));
            assert_eq!(v.erase(pos), Ok(pos));
            assert_eq!(v.len(), 3);
            assert_eq!(Tracked::live(), before + 3);
            assert!(v.iter().all(Tracked::verify));
            assert!(v.iter().all(|t| t.value() != pos as u8 + 1));
            assert_eq!(v.get(pos).is_none(), pos == 3);
        }
    }

    #[test]
    fn test_erase_out_of_bounds_is_noop() {
        let mut v: FixedVec<i32, 4> = FixedVec::try_from_array([1, 2]).unwrap();
        assert_eq!(v.erase(2), Err(Error::OutOfBounds));
        assert_eq!(v, [1, 2]);
        assert_eq!(v.erase(1), Ok(1));
        assert_eq!(v.len(), 1);
        assert_eq!(v.erase(0), Ok(0));
        assert_eq!(v.erase(0), Err(Error::OutOfBounds));
        assert!(v.is_empty());
    }

    #[test]
    fn test_erase_returned_index_chains() {
        let before = Tracked::live();
        let mut v: FixedVec<Tracked, 6> = FixedVec::from(tracked_seq::<6>(0));
        // Erase every odd value by following the returned position.
        let mut i = 0;
        while i < v.len() {
            i = if v[i].value() % 2 == 1 { v.erase(i).unwrap() } else { i + 1 };
        }
        assert_eq!(v, [0, 2, 4]);
        assert!(v.iter().all(Tracked::verify));
        assert_eq!(Tracked::live(), before + 3);
    }

    #[test]
    fn test_remove_and_swap_remove() {
        let mut r: FixedVec<i32, 5> = FixedVec::from([1, 2, 3, 4, 5]);
        assert_eq!(r.remove(2), Some(3));
        assert_eq!(r, [1, 2, 4, 5]);
        assert_eq!(r.remove(8), None);
        assert_eq!(r.try_remove(8), Err(Error::OutOfBounds));
        assert_eq!(r.remove(0), Some(1));
        assert_eq!(r.remove(r.len() - 1), Some(5));
        assert_eq!(r, [2, 4]);

        let mut s: FixedVec<i32, 5> = FixedVec::from([1, 2, 3, 4, 5]);
        assert_eq!(s.swap_remove(1), Some(2));
        assert_eq!(s, [1, 5, 3, 4]);
        assert_eq!(s.swap_remove(3), Some(4));
        assert_eq!(s, [1, 5, 3]);
        assert_eq!(s.try_swap_remove(10), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_remove_returns_live_value() {
        let before = Tracked::live();
        let mut v: FixedVec<Tracked, 5> = FixedVec::from(tracked_seq::<5>(0));
        let removed = v.remove(1).unwrap();
        assert!(removed.verify());
        assert_eq!(removed.value(), 1);
        let swapped = v.swap_remove(0).unwrap();
        assert!(swapped.verify());
        assert_eq!(v, [4, 2, 3]);
        assert!(v.iter().all(Tracked::verify));
        drop((removed, swapped, v));
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn test_clear_drops_everything() {
        let before = Tracked::live();
        let mut v: FixedVec<Tracked, 5> = FixedVec::from(tracked_seq::<5>(0));
        v.clear();
        assert!(v.is_empty());
        assert_eq!(Tracked::live(), before);
        v.push(Tracked::new(1)).unwrap();
        assert_eq!(v, [1]);
    }
}
