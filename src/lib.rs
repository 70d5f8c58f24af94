// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-capacity-vec`
//!
//! A `no_std`, fixed-capacity vector whose storage lives entirely inline.
//!
//! The core type, [`FixedVec<T, N>`], stores up to `N` elements of any type `T`
//! in an inline `[MaybeUninit<T>; N]` arena and tracks a logical length
//! `len ∈ 0..=N`. It never allocates: when an operation would need more than
//! `N` live elements it returns [`Error::Full`] instead of growing.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std` or embedded environment, or on a latency-sensitive
//!   path that must not touch the allocator.
//! - You know the maximum number of elements at compile time.
//! - You want `Vec`-like ergonomics (ordered, random access, slice views) for
//!   element types that are not `Copy`, including move-only types.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed by the type (`FixedVec::<T, N>::CAPACITY == N`).
//! - Only the prefix `[0, len)` is initialized; the tail is never read or dropped.
//! - Dropping the vector drops every live element in order.
//! - Operations that may exceed capacity come in two flavors:
//!   - **Fallible**: return [`Error::Full`] and leave the vector unchanged
//!     (e.g. [`FixedVec::push`], [`FixedVec::insert`], [`FixedVec::insert_n`],
//!     [`FixedVec::extend_from_slice`], [`FixedVec::from_elem`],
//!     [`FixedVec::try_from_iter`]).
//!   - **Truncating**: silently ignore extra elements (e.g.
//!     [`FixedVec::push_truncated`], [`FixedVec::from_slice_truncated`],
//!     [`FromIterator<T>`] and [`Extend<T>`]).
//! - Checked access ([`FixedVec::at`]) returns [`Error::OutOfBounds`];
//!   indexing (`v[i]`, [`FixedVec::front`], [`FixedVec::back`]) panics like a slice.
//!
//! ## Panic safety
//!
//! Element constructors (`Clone`, `Default`, user closures, iterators) may
//! panic. Every operation that brings several elements to life is guarded so
//! that an unwinding panic never leaks a live element and never drops one
//! twice. Positional inserts are restored to their original contents.
//!
//! ## Features
//!
//! - `serde`: enables `Serialize` / `Deserialize` for `FixedVec<T, N>`.
//!   Deserializing more than `N` elements is an error.
//!
//! ## Example
//!
//! ```rust
//! use fixed_capacity_vec::{Error, FixedVec};
//!
//! let mut v: FixedVec<String, 4> = FixedVec::new();
//! v.push("b".to_owned()).unwrap();
//! v.insert(0, "a".to_owned()).unwrap();
//! v.insert_n(2, 2, "c".to_owned()).unwrap();
//! assert_eq!(v, ["a", "b", "c", "c"]);
//! assert_eq!(v.push("d".to_owned()), Err(Error::Full));
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod macros;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{Drain, FixedVec};
