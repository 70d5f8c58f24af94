// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional insertion.
//!
//! Every insert follows the same protocol: validate `index` and capacity
//! before touching anything, open a gap (the suffix `[index, len)` is
//! relocated right, highest slot first), construct the new values into the
//! vacated slots, and close the gap. If constructing a value panics, the
//! values written so far are dropped and the suffix moves back, so the
//! vector keeps its original contents.

// Crate imports
use crate::{
    error::Error,
    vec::{FixedVec, slots::Gap},
};

impl<T, const N: usize> FixedVec<T, N> {
    /// Inserts `value` at `index`, shifting elements to the right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.check_insert(index, 1)?;
        // SAFETY: checked above.
        let mut gap = unsafe { Gap::open(self, index, 1) };
        gap.fill(value);
        gap.commit();
        Ok(())
    }

    /// Inserts `count` clones of `value` at `index`, shifting elements to the right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if `len + count > N` (overflow-checked).
    ///
    /// The last inserted slot receives `value` itself rather than a clone.
    ///
    /// ```rust
    /// use fixed_capacity_vec::FixedVec;
    ///
    /// let mut v: FixedVec<i32, 10> = FixedVec::try_from_array([1, 2, 3]).unwrap();
    /// v.insert_n(1, 2, 100).unwrap();
    /// assert_eq!(v, [1, 100, 100, 2, 3]);
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_insert(index, count)?;
        if count == 0 {
            return Ok(());
        }
        // SAFETY: checked above.
        let mut gap = unsafe { Gap::open(self, index, count) };
        while gap.remaining() > 1 {
            gap.fill(value.clone());
        }
        gap.fill(value);
        gap.commit();
        Ok(())
    }

    /// Inserts clones of every element of `src` at `index`, preserving their order.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if `len + src.len() > N`.
    pub fn insert_from_slice(&mut self, index: usize, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_insert(index, src.len())?;
        // SAFETY: checked above.
        let mut gap = unsafe { Gap::open(self, index, src.len()) };
        for item in src {
            gap.fill(item.clone());
        }
        gap.commit();
        Ok(())
    }

    /// Inserts the items of `iter` at `index`, preserving their order.
    ///
    /// The number of items is taken from [`ExactSizeIterator::len`] and checked
    /// against capacity before anything moves:
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if `len + iter.len() > N`.
    ///
    /// At most `iter.len()` items are consumed. If the iterator ends early, only
    /// the items it produced are inserted. Returns the number of inserted items.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let count = iter.len();
        self.check_insert(index, count)?;
        // SAFETY: checked above.
        let mut gap = unsafe { Gap::open(self, index, count) };
        for item in iter.take(count) {
            gap.fill(item);
        }
        Ok(gap.commit())
    }

    /// Constructs the value returned by `f` directly at `index`, shifting
    /// elements to the right, and returns a reference to it.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// `f` is not called when an error is returned. If `f` panics, the vector
    /// keeps its original contents.
    pub fn emplace_with<F>(&mut self, index: usize, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        self.check_insert(index, 1)?;
        {
            // SAFETY: checked above.
            let mut gap = unsafe { Gap::open(self, index, 1) };
            gap.fill(f());
            gap.commit();
        }
        Ok(&mut self.as_mut_slice()[index])
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Error,
        testing::{MoveOnly, Tracked, expect_panic, tracked_seq},
        vec::FixedVec,
    };
    use alloc::vec::Vec;

    fn one_two_three() -> FixedVec<Tracked, 10> {
        FixedVec::try_from_array(tracked_seq::<3>(1)).unwrap()
    }

    fn full() -> FixedVec<Tracked, 10> {
        FixedVec::from(tracked_seq::<10>(0))
    }

    fn values<const N: usize>(v: &FixedVec<Tracked, N>) -> Vec<u8> {
        v.iter().map(Tracked::value).collect()
    }

    #[test]
    fn test_insert_preserves_order_at_every_position() {
        let expected: [&[u8]; 4] = [
            &[100, 1, 2, 3],
            &[1, 100, 2, 3],
            &[1, 2, 100, 3],
            &[1, 2, 3, 100],
        ];
        let before = Tracked::live();
        for (pos, want) in expected.iter().enumerate() {
            let mut v = one_two_three();
            v.insert(pos, Tracked::new(100)).unwrap();
            assert_eq!(values(&v), *want);
            assert!(v.iter().all(Tracked::verify));
        }
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut v: FixedVec<Tracked, 10> = FixedVec::new();
        v.insert(0, Tracked::new(100)).unwrap();
        assert_eq!(v, [100]);
        assert_eq!(v.insert(2, Tracked::new(1)), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_insert_then_erase_restores_sequence() {
        for pos in 0..=3 {
            let mut v = one_two_three();
            v.insert(pos, Tracked::new(100)).unwrap();
            v.erase(pos).unwrap();
            assert_eq!(v, [1, 2, 3]);
            assert!(v.iter().all(Tracked::verify));
        }
    }

    #[test]
    fn test_insert_into_full_is_noop() {
        let before = Tracked::live();
        for pos in [0, 1, 2, 10] {
            let mut v = full();
            let snapshot = values(&v);
            assert_eq!(v.insert(pos, Tracked::new(100)), Err(Error::Full));
            assert_eq!(values(&v), snapshot);
            assert_eq!(v.len(), 10);
            assert!(v.iter().all(Tracked::verify));
        }
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn test_insert_bounds_checked_before_capacity() {
        let mut v: FixedVec<i32, 2> = FixedVec::try_from(&[10, 20][..]).unwrap();
        assert_eq!(v.insert(3, 99), Err(Error::OutOfBounds));
        assert_eq!(v.insert(0, 1), Err(Error::Full));
        assert_eq!(v, [10, 20]);
    }

    #[test]
    fn test_insert_n_scenario() {
        let mut v: FixedVec<i32, 10> = FixedVec::try_from_array([1, 2, 3]).unwrap();
        v.insert_n(1, 2, 100).unwrap();
        assert_eq!(v, [1, 100, 100, 2, 3]);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_insert_n_verifies_elements_and_zero_count() {
        let before = Tracked::live();
        {
            let mut v = one_two_three();
            v.insert_n(0, 0, Tracked::new(9)).unwrap();
            assert_eq!(v, [1, 2, 3]);
            v.insert_n(2, 4, Tracked::new(9)).unwrap();
            assert_eq!(v, [1, 2, 9, 9, 9, 9, 3]);
            assert!(v.iter().all(Tracked::verify));
        }
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn test_insert_n_overflow_is_noop() {
        let mut v: FixedVec<i32, 4> = FixedVec::try_from_array([1, 2]).unwrap();
        assert_eq!(v.insert_n(1, 3, 0), Err(Error::Full));
        assert_eq!(v.insert_n(1, usize::MAX, 0), Err(Error::Full));
        assert_eq!(v.insert_n(3, 1, 0), Err(Error::OutOfBounds));
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_insert_range_at_every_position() {
        for pos in 0..=3 {
            let mut v: FixedVec<i32, 10> = FixedVec::try_from_array([1, 2, 3]).unwrap();
            v.insert_from_slice(pos, &[100, 101]).unwrap();
            let mut want = alloc::vec![1, 2, 3];
            want.insert(pos, 101);
            want.insert(pos, 100);
            assert_eq!(v, want[..]);
        }
    }

    #[test]
    fn test_insert_range_into_mostly_full() {
        let mut v: FixedVec<Tracked, 10> = FixedVec::try_from_array(tracked_seq::<9>(0)).unwrap();
        let extra = [Tracked::new(100), Tracked::new(101)];
        assert_eq!(v.insert_from_slice(1, &extra), Err(Error::Full));
        assert_eq!(v.len(), 9);
        v.insert_from_slice(9, &extra[..1]).unwrap();
        assert!(v.is_full());
        assert_eq!(*v.back(), 100);
        assert!(v.iter().all(Tracked::verify));
    }

    #[test]
    fn test_insert_from_slice_clone_panic_restores() {
        let before = Tracked::live();
        let mut v = one_two_three();
        let extra = tracked_seq::<3>(50);
        Tracked::panic_after_clones(2);
        expect_panic(|| {
            let _ = v.insert_from_slice(1, &extra);
        });
        assert_eq!(v, [1, 2, 3]);
        assert!(v.iter().all(Tracked::verify));
        drop(v);
        drop(extra);
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn test_insert_iter_moves_items() {
        let mut v: FixedVec<MoveOnly, 6> = FixedVec::new();
        v.push(MoveOnly::new(1)).unwrap();
        v.push(MoveOnly::new(4)).unwrap();
        let n = v
            .insert_iter(1, [MoveOnly::new(2), MoveOnly::new(3)])
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(v, [1, 2, 3, 4]);
        assert!(v.iter().all(MoveOnly::verify));

        let err = v.insert_iter(0, (0..3).map(MoveOnly::new)).unwrap_err();
        assert_eq!(err, Error::Full);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_insert_iter_short_iterator_closes_gap() {
        // Reports three items but yields one.
        struct Liar(u8);
        impl Iterator for Liar {
            type Item = u8;
            fn next(&mut self) -> Option<u8> {
                if self.0 == 0 {
                    return None;
                }
                self.0 -= 1;
                Some(42)
            }
        }
        impl ExactSizeIterator for Liar {
            fn len(&self) -> usize {
                3
            }
        }

        let mut v: FixedVec<u8, 8> = FixedVec::try_from_array([1, 2, 3]).unwrap();
        assert_eq!(v.insert_iter(1, Liar(1)), Ok(1));
        assert_eq!(v, [1, 42, 2, 3]);
    }

    #[test]
    fn test_emplace_with_constructs_in_place() {
        let mut v: FixedVec<MoveOnly, 4> = FixedVec::new();
        v.push(MoveOnly::new(1)).unwrap();
        v.push(MoveOnly::new(3)).unwrap();
        let slot = v.emplace_with(1, || MoveOnly::new(2)).unwrap();
        assert_eq!(slot.value(), 2);
        assert_eq!(v, [1, 2, 3]);
        assert!(v.iter().all(MoveOnly::verify));
        assert_eq!(v.emplace_with(5, || MoveOnly::new(0)).err(), Some(Error::OutOfBounds));
    }

    #[test]
    fn test_emplace_with_on_full_is_noop() {
        let before = Tracked::live();
        let mut v: FixedVec<Tracked, 3> = FixedVec::from(tracked_seq::<3>(1));
        let mut called = false;
        let res = v.emplace_with(1, || {
            called = true;
            Tracked::new(9)
        });
        assert_eq!(res.err(), Some(Error::Full));
        assert!(!called);
        assert_eq!(v.len(), 3);
        assert_eq!(v, [1, 2, 3]);
        assert!(v.iter().all(Tracked::verify));
        drop(v);
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn test_emplace_with_panic_restores() {
        let before = Tracked::live();
        let mut v = one_two_three();
        expect_panic(|| {
            let _ = v.emplace_with(0, || panic!("constructor failed"));
        });
        assert_eq!(v, [1, 2, 3]);
        assert!(v.iter().all(Tracked::verify));
        drop(v);
        assert_eq!(Tracked::live(), before);
    }
}
