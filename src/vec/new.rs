// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> FixedVec<T, N> {
    /// Constructs an empty vector. Never fails and never touches the arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// Returns [`Error::Full`] if `count > N`; nothing is constructed in that case.
    /// The last slot receives `value` itself rather than a clone.
    ///
    /// ```rust
    /// use fixed_capacity_vec::{Error, FixedVec};
    ///
    /// let v = FixedVec::<u8, 4>::from_elem(3, 7).unwrap();
    /// assert_eq!(v, [7, 7, 7]);
    /// assert_eq!(FixedVec::<u8, 4>::from_elem(5, 7), Err(Error::Full));
    /// ```
    pub fn from_elem(count: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.resize(count, value)?;
        Ok(v)
    }

    /// Constructs a vector holding `count` default-constructed values.
    ///
    /// Returns [`Error::Full`] if `count > N`; nothing is constructed in that case.
    pub fn from_default(count: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize_with(count, T::default)?;
        Ok(v)
    }
}

impl<T, const N: usize> Default for FixedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
