// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> From<[T; N]> for FixedVec<T, N> {
    /// Moves every element of `src` into a full vector.
    fn from(src: [T; N]) -> Self {
        Self {
            buf: src.map(MaybeUninit::new),
            len: N,
        }
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for FixedVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        src.clone().into()
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedVec<T, N> {
    type Error = Error;

    /// Clones `src` into a new vector, or returns [`Error::Full`] if
    /// `src.len() > N`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Moves the elements of an array of any length `M` into a new vector.
    ///
    /// Returns [`Error::Full`] if `M > N`; the array is dropped in that case.
    ///
    /// ```rust
    /// use fixed_capacity_vec::{Error, FixedVec};
    ///
    /// let v: FixedVec<&str, 4> = FixedVec::try_from_array(["a", "b"]).unwrap();
    /// assert_eq!(v, ["a", "b"]);
    /// assert_eq!(FixedVec::<u8, 1>::try_from_array([1, 2]), Err(Error::Full));
    /// ```
    #[inline]
    pub fn try_from_array<const M: usize>(src: [T; M]) -> Result<Self, Error> {
        if M > N {
            return Err(Error::Full);
        }
        let mut v = Self::new();
        for item in src {
            // SAFETY: at most `M <= N` pushes.
            unsafe { v.push_unchecked(item) };
        }
        Ok(v)
    }
}
