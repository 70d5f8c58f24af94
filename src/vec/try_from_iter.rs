// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T, const N: usize> FixedVec<T, N> {
    /// Tries to construct from an iterator, erroring with [`Error::Full`] if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns `Err(Error::Full)`.
    /// - Any elements pushed before the overflow are dropped; the returned `Err` does *not*
    ///   include the partially filled vector.
    /// - The source iterator may be left partially consumed (it stops at the first overflow).
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.push(item)?;
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Error,
        testing::{MoveOnly, Tracked},
        vec::FixedVec,
    };

    #[test]
    fn test_try_from_iter_move_only_type() {
        let v: FixedVec<MoveOnly, 4> = FixedVec::try_from_iter((1..=3).map(MoveOnly::new)).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_try_from_iter_overflow_drops_partial() {
        let before = Tracked::live();
        let err = FixedVec::<Tracked, 3>::try_from_iter((0..5).map(Tracked::new)).unwrap_err();
        assert_eq!(err, Error::Full);
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn test_try_from_iter_stops_at_first_overflow() {
        let mut src = 0..10;
        let _ = FixedVec::<i32, 2>::try_from_iter(&mut src);
        assert_eq!(src.next(), Some(3));
    }
}
