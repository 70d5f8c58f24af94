// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedVec`](crate::FixedVec).
//!
//! `Index` and `IndexMut` forward to the live slice, so they mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the initialized prefix `[0..len)`.
//!
//! For unchecked access, go through the slice: `v.get_unchecked(i)`.

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedVec<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
