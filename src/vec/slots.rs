// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot-level primitives over the inline arena.
//!
//! This is the only place that touches raw slots. Everything else in the crate
//! is written in terms of these operations and keeps `len` in step with them.
//!
//! Shifting relocates elements bitwise: a relocated element is never dropped at
//! its old slot and never duplicated. Vacated slots are only ever filled with
//! [`FixedVec::construct_at`] (a raw write), never assigned to, since an
//! assignment would drop whatever bytes the slot still holds.

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::ptr;

impl<T, const N: usize> FixedVec<T, N> {
    /// Brings slot `index` to life by writing `value` into it.
    ///
    /// # Safety
    ///
    /// `index < N` and slot `index` must be uninitialized (or hold a value that
    /// has already been moved out). Does not update `len`.
    #[inline]
    pub(crate) unsafe fn construct_at(&mut self, index: usize, value: T) {
        debug_assert!(index < N);
        // SAFETY: in bounds per the caller contract.
        unsafe { self.buf.get_unchecked_mut(index) }.write(value);
    }

    /// Drops the value in slot `index` in place; the slot becomes uninitialized.
    ///
    /// # Safety
    ///
    /// `index < N` and slot `index` must be live. Does not update `len`.
    #[inline]
    pub(crate) unsafe fn destroy_at(&mut self, index: usize) {
        debug_assert!(index < N);
        // SAFETY: the slot is in bounds and live per the caller contract.
        unsafe { self.buf.get_unchecked_mut(index).assume_init_drop() }
    }

    /// Moves the value out of slot `index`; the slot becomes uninitialized.
    ///
    /// # Safety
    ///
    /// `index < N` and slot `index` must be live. Does not update `len`.
    #[inline]
    pub(crate) unsafe fn take_at(&mut self, index: usize) -> T {
        debug_assert!(index < N);
        // SAFETY: the slot is in bounds and live per the caller contract.
        unsafe { self.buf.get_unchecked(index).assume_init_read() }
    }

    /// Relocates `count` live slots starting at `src` to start at `dst`.
    ///
    /// The ranges may overlap. Afterwards the destination range is live and the
    /// part of the source range not covered by it is logically uninitialized.
    ///
    /// # Safety
    ///
    /// `src + count <= N`, `dst + count <= N`, every slot in the source range
    /// is live, and no live slot outside the source range lies in the
    /// destination range. Does not update `len`.
    #[inline]
    pub(crate) unsafe fn relocate(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(src + count <= N && dst + count <= N);
        if count == 0 || src == dst {
            return;
        }
        let base = self.as_mut_ptr();
        // SAFETY: both ranges are inside the arena per the caller contract;
        // `ptr::copy` handles the overlap.
        unsafe { ptr::copy(base.add(src), base.add(dst), count) }
    }

    /// Constructs `value` at slot `len` and grows `len` by one.
    ///
    /// # Safety
    ///
    /// The vector must not be full.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N);
        // SAFETY: `len < N` and `[len, N)` is uninitialized by invariant.
        unsafe { self.construct_at(self.len, value) };
        self.len += 1;
    }

    /// Checks that `count` elements can be inserted at `index`.
    ///
    /// Reports [`Error::OutOfBounds`](crate::Error::OutOfBounds) before
    /// [`Error::Full`](crate::Error::Full); the sum is overflow-checked.
    #[inline]
    pub(crate) fn check_insert(&self, index: usize, count: usize) -> Result<(), crate::Error> {
        if index > self.len {
            return Err(crate::Error::OutOfBounds);
        }
        match self.len.checked_add(count) {
            Some(new_len) if new_len <= N => Ok(()),
            _ => Err(crate::Error::Full),
        }
    }
}

/// A hole of `count` uninitialized slots opened at `index`.
///
/// While the gap is open the suffix that used to start at `index` sits at
/// `index + count`, and the vector's `len` only covers the prefix, so leaking
/// the guard leaks the suffix instead of exposing uninitialized slots.
///
/// Dropping the guard closes the gap:
/// - after [`Gap::commit`], the values written so far are kept and any unused
///   part of the hole is squeezed out;
/// - otherwise (an element constructor unwound), the values written so far are
///   dropped and the vector is restored to its original contents.
pub(crate) struct Gap<'a, T, const N: usize> {
    vec: &'a mut FixedVec<T, N>,
    index: usize,
    count: usize,
    tail: usize,
    filled: usize,
    committed: bool,
}

impl<'a, T, const N: usize> Gap<'a, T, N> {
    /// Opens a gap of `count` slots at `index`.
    ///
    /// # Safety
    ///
    /// `index <= vec.len()` and `vec.len() + count <= N`
    /// (see [`FixedVec::check_insert`]).
    pub(crate) unsafe fn open(vec: &'a mut FixedVec<T, N>, index: usize, count: usize) -> Self {
        let len = vec.len;
        let tail = len - index;
        vec.len = index;
        // SAFETY: `[index, len)` is live and `[len, len + count)` is
        // uninitialized and in bounds, so the shifted suffix only lands on
        // slots it vacates or on uninitialized ones.
        unsafe { vec.relocate(index, index + count, tail) };
        Self {
            vec,
            index,
            count,
            tail,
            filled: 0,
            committed: false,
        }
    }

    /// Number of slots still waiting for a value.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.count - self.filled
    }

    /// Constructs `value` into the next empty slot of the gap.
    ///
    /// # Panics
    ///
    /// Panics if the gap is already filled.
    #[inline]
    pub(crate) fn fill(&mut self, value: T) {
        assert!(self.filled < self.count, "gap overfilled");
        // SAFETY: `index + filled < index + count <= N` and that slot was
        // vacated by `open`.
        unsafe { self.vec.construct_at(self.index + self.filled, value) };
        self.filled += 1;
    }

    /// Keeps every value written so far and closes the gap.
    ///
    /// Returns the number of values inserted.
    pub(crate) fn commit(mut self) -> usize {
        self.committed = true;
        self.filled
    }
}

impl<T, const N: usize> Drop for Gap<'_, T, N> {
    fn drop(&mut self) {
        if !self.committed {
            while self.filled > 0 {
                self.filled -= 1;
                // SAFETY: slots `[index, index + filled)` were constructed by `fill`.
                unsafe { self.vec.destroy_at(self.index + self.filled) };
            }
        }
        let kept = self.index + self.filled;
        // SAFETY: the suffix is live at `[index + count, index + count + tail)`
        // and `[kept, index + count)` holds no live value.
        unsafe { self.vec.relocate(self.index + self.count, kept, self.tail) };
        self.vec.len = kept + self.tail;
    }
}
