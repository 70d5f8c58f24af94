// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`fixed_vec!`](crate::fixed_vec) constructor macro.

/// Counts comma-separated expressions at compile time without evaluating them.
///
/// Used by [`fixed_vec!`](crate::fixed_vec); not intended to be called directly.
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:expr $(, $tail:expr)*) => {
        1usize + $crate::__count!($($tail),*)
    };
}

/// Creates a [`FixedVec`](crate::FixedVec).
///
/// ## Forms
///
/// Empty vector, capacity inferred:
/// ```
/// use fixed_capacity_vec::{FixedVec, fixed_vec};
/// let v: FixedVec<String, 3> = fixed_vec![];
/// assert!(v.is_empty());
/// ```
///
/// Empty vector with explicit capacity:
/// ```
/// use fixed_capacity_vec::fixed_vec;
/// let mut v = fixed_vec![8;];
/// v.push(42).unwrap();
/// assert_eq!(v.capacity(), 8);
/// ```
///
/// Full vector from elements (capacity is the element count):
/// ```
/// use fixed_capacity_vec::fixed_vec;
/// let v = fixed_vec![1, 2, 3];
/// assert!(v.is_full());
/// ```
///
/// Vector from elements with explicit capacity:
/// ```
/// use fixed_capacity_vec::fixed_vec;
/// let v = fixed_vec![4; "a", "b", "c"];
/// assert_eq!(v.len(), 3);
/// ```
///
/// In the last form the capacity is checked against the element count at
/// compile time:
///
/// ```compile_fail
/// use fixed_capacity_vec::fixed_vec;
/// let v = fixed_vec![2; 1, 2, 3];
/// ```
#[macro_export]
macro_rules! fixed_vec {
    () => {
        $crate::FixedVec::new()
    };

    ($cap:expr;) => {
        $crate::FixedVec::<_, { $cap }>::new()
    };

    ($($elem:expr),+ $(,)?) => {
        $crate::FixedVec::from([$($elem),+])
    };

    ($cap:expr; $($elem:expr),+ $(,)?) => {{
        const COUNT: usize = $crate::__count!($($elem),+);
        const _: () = assert!(
            $cap >= COUNT,
            concat!(
                "fixed_vec!: capacity ",
                stringify!($cap),
                " is smaller than the number of elements"
            )
        );
        match $crate::FixedVec::<_, { $cap }>::try_from_array([$($elem),+]) {
            Ok(v) => v,
            Err(_) => unreachable!(),
        }
    }};
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        testing::{MoveOnly, Tracked},
        vec::FixedVec,
    };

    #[test]
    fn test_count() {
        const N: usize = crate::__count!(1, 2, 3, 4);
        assert_eq!(N, 4);
        assert_eq!(crate::__count!(), 0);
    }

    #[test]
    fn test_all_forms() {
        let empty: FixedVec<i32, 3> = fixed_vec![];
        assert!(empty.is_empty());

        let mut with_cap = fixed_vec![5;];
        with_cap.push(1u8).unwrap();
        assert_eq!(with_cap.capacity(), 5);

        let full = fixed_vec![1, 2, 3,];
        assert_eq!(full.capacity(), 3);
        assert_eq!(full, [1, 2, 3]);

        let partial = fixed_vec![6; 'x', 'y'];
        assert_eq!(partial.capacity(), 6);
        assert_eq!(partial, ['x', 'y']);
    }

    #[test]
    fn test_elements_are_moved_not_cloned() {
        let before = Tracked::live();
        let v = fixed_vec![4; MoveOnly::new(1), MoveOnly::new(2)];
        assert_eq!(v, [1, 2]);
        assert_eq!(Tracked::live(), before + 2);
        drop(v);
        assert_eq!(Tracked::live(), before);
    }
}
