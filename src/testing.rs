// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented element types shared by the unit tests.
//!
//! Every [`Tracked`] instance owns a unique id that is registered in a
//! thread-local registry while the instance is alive. Clones register a fresh
//! id, drops unregister theirs. A bitwise duplicate of a live instance (a
//! shallow copy) or a double drop is therefore detected: the second drop finds
//! its id already gone, and `verify` fails on any instance whose id is no
//! longer registered.
//!
//! Tests compare [`Tracked::live`] before and after a scenario rather than
//! against zero, so they stay independent of how the harness schedules them.

// Std imports
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

thread_local! {
    static REGISTRY: RefCell<HashMap<u64, u8>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(1) };
    static CLONES_BEFORE_PANIC: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Cloneable instrumented element carrying a small payload.
#[derive(Debug)]
pub(crate) struct Tracked {
    id: u64,
    value: u8,
}

impl Tracked {
    pub(crate) fn new(value: u8) -> Self {
        let id = NEXT_ID.with(|n| {
            let id = n.get();
            n.set(id + 1);
            id
        });
        REGISTRY.with(|r| r.borrow_mut().insert(id, value));
        Self { id, value }
    }

    pub(crate) fn value(&self) -> u8 {
        self.value
    }

    /// Returns `true` while this instance is registered with its own payload.
    pub(crate) fn verify(&self) -> bool {
        REGISTRY.with(|r| r.borrow().get(&self.id) == Some(&self.value))
    }

    /// Number of instances currently alive on this thread.
    pub(crate) fn live() -> usize {
        REGISTRY.with(|r| r.borrow().len())
    }

    /// Lets `n` more clones succeed, then makes the next one panic.
    pub(crate) fn panic_after_clones(n: usize) {
        CLONES_BEFORE_PANIC.with(|c| c.set(Some(n)));
    }

    pub(crate) fn disarm() {
        CLONES_BEFORE_PANIC.with(|c| c.set(None));
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        assert!(self.verify(), "cloning a dead instance (id {})", self.id);
        CLONES_BEFORE_PANIC.with(|c| match c.get() {
            Some(0) => {
                c.set(None);
                panic!("injected clone failure");
            }
            Some(n) => c.set(Some(n - 1)),
            None => {}
        });
        Self::new(self.value)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let removed = REGISTRY.with(|r| r.borrow_mut().remove(&self.id));
        assert!(removed.is_some(), "double drop of instance {}", self.id);
    }
}

impl PartialEq<u8> for Tracked {
    fn eq(&self, other: &u8) -> bool {
        self.value == *other
    }
}

/// Move-only instrumented element: no `Clone`, no `Default`.
#[derive(Debug)]
pub(crate) struct MoveOnly(Tracked);

impl MoveOnly {
    pub(crate) fn new(value: u8) -> Self {
        Self(Tracked::new(value))
    }

    pub(crate) fn value(&self) -> u8 {
        self.0.value()
    }

    pub(crate) fn verify(&self) -> bool {
        self.0.verify()
    }
}

impl PartialEq<u8> for MoveOnly {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

/// Builds `[Tracked(first), Tracked(first + 1), ...]` of length `M`.
pub(crate) fn tracked_seq<const M: usize>(first: u8) -> [Tracked; M] {
    core::array::from_fn(|i| Tracked::new(first + i as u8))
}

/// Runs `f`, expecting it to panic.
pub(crate) fn expect_panic<F: FnOnce()>(f: F) {
    let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    Tracked::disarm();
    assert!(res.is_err(), "expected a panic");
}
