// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedVec` type and its inherent API.
//!
//! `FixedVec<T, N>` is a fixed-capacity vector for arbitrary element types.
//! It stores elements inline in an arena of `N` uninitialized slots and tracks
//! how many of them, counted from the front, are live.
//!
//! No heap allocations are performed.

mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod slots;
mod split_off;
mod try_from_iter;

pub use drain::Drain;

// Crate imports
use crate::{error::Error, iter::IntoIter};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector whose storage lives inline.
///
/// `FixedVec<T, N>` owns an arena of `N` slots sized and aligned for `T` and a
/// logical length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the arena is stored inline (typically on the stack), so no operation
///   ever allocates or reallocates;
/// - any `T` is supported, including move-only types; methods that duplicate
///   elements require `T: Clone` only where they need it;
/// - dropping the vector drops its live elements in order.
///
/// # Layout and invariants
///
/// - `0 <= len <= N`.
/// - Slots `[0, len)` hold live `T` values; slots `[len, N)` are uninitialized
///   and are never read, written through a `T`, or dropped.
/// - The arena is part of the value. Shifting elements during `insert` or
///   `erase` changes which value sits in a slot, never where the slots are.
///
/// # Complexity characteristics
///
/// - The type size is roughly `N * size_of::<T>() + size_of::<usize>()`.
/// - Moving a `FixedVec<T, N>` moves the entire arena, which is `O(N)` in the
///   capacity; pass it by reference in hot code.
/// - `push`, `pop`, indexing and `at` are `O(1)`; positional `insert`,
///   `erase`, `remove` are `O(len - index)`.
///
/// # Fallible vs truncating operations
///
/// - **Fallible** (error on overflow, no changes on error):
///   [`push`](FixedVec::push), [`emplace_back_with`](FixedVec::emplace_back_with),
///   [`insert`](FixedVec::insert), [`insert_n`](FixedVec::insert_n),
///   [`insert_from_slice`](FixedVec::insert_from_slice),
///   [`insert_iter`](FixedVec::insert_iter), [`emplace_with`](FixedVec::emplace_with),
///   [`extend_from_slice`](FixedVec::extend_from_slice),
///   [`try_extend_from_iter`](FixedVec::try_extend_from_iter),
///   [`resize`](FixedVec::resize), and the constructors
///   [`from_elem`](FixedVec::from_elem), [`from_default`](FixedVec::from_default),
///   [`try_from_array`](FixedVec::try_from_array),
///   [`try_from_iter`](FixedVec::try_from_iter) and [`TryFrom<&[T]>`](TryFrom).
///
///   These return [`Error::Full`] when the operation would exceed capacity.
///
/// - **Truncating** (silently drop extra elements):
///   [`push_truncated`](FixedVec::push_truncated),
///   [`extend_from_slice_truncated`](FixedVec::extend_from_slice_truncated),
///   [`from_slice_truncated`](FixedVec::from_slice_truncated),
///   [`from_array_truncated`](FixedVec::from_array_truncated),
///   [`Extend<T>`](core::iter::Extend) and [`FromIterator<T>`](core::iter::FromIterator).
///
/// # Examples
///
/// ```rust
/// use fixed_capacity_vec::FixedVec;
///
/// let mut v: FixedVec<i32, 10> = FixedVec::try_from_array([1, 2, 3]).unwrap();
/// v.insert_n(1, 2, 100).unwrap();
/// assert_eq!(v, [1, 100, 100, 2, 3]);
/// assert_eq!(v.len(), 5);
///
/// // The vector derefs to a slice, so slice algorithms work unmodified.
/// v.sort_unstable();
/// assert_eq!(v, [1, 2, 3, 100, 100]);
/// ```
pub struct FixedVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> FixedVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest length this vector can ever reach (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Bounds-checked access, returning [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfBounds)
    }

    /// Mutable bounds-checked access, returning [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::OutOfBounds)
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use [`first`](FixedVec::first) for a
    /// non-panicking variant.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.first() {
            Some(x) => x,
            None => panic!("front() called on an empty FixedVec"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.first_mut() {
            Some(x) => x,
            None => panic!("front_mut() called on an empty FixedVec"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use [`last`](FixedVec::last) for a
    /// non-panicking variant.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.last() {
            Some(x) => x,
            None => panic!("back() called on an empty FixedVec"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.last_mut() {
            Some(x) => x,
            None => panic!("back_mut() called on an empty FixedVec"),
        }
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Moves every element into an owning iterator **and clears `self`**.
    ///
    /// - Items are yielded in order from front to back.
    /// - After calling, `self.len() == 0`.
    #[inline]
    pub fn drain_all(&mut self) -> IntoIter<T, N> {
        core::mem::take(self).into_iter()
    }
}

impl<T, const N: usize> Drop for FixedVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T, U, const N: usize> PartialEq<[U]> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize> PartialEq<&[U]> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: Eq, const N: usize> Eq for FixedVec<T, N> {}
impl<T: Ord, const N: usize> Ord for FixedVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone, const N: usize> Clone for FixedVec<T, N> {
    /// Clones every live element, in order, into a fresh arena.
    ///
    /// If `T::clone` panics, the elements cloned so far are dropped.
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self {
            // SAFETY: `out.len < self.len <= N`.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    /// Drops every element of `self`, then clones `source` element-wise.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source {
            // SAFETY: `self.len < source.len <= N`.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T, const N: usize> Deref for FixedVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for FixedVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for FixedVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
