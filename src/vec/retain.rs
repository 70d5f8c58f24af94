// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVec;

/// Keeps the vector consistent while `retain_mut` runs.
///
/// `processed` elements have been visited and `deleted` of them dropped; the
/// kept ones are packed at `[0, processed - deleted)`. If the predicate or a
/// destructor unwinds, dropping the guard slides the unvisited tail down over
/// the hole so that no element is lost or dropped twice.
struct BackshiftOnDrop<'a, T, const N: usize> {
    v: &'a mut FixedVec<T, N>,
    processed: usize,
    deleted: usize,
    original_len: usize,
}

impl<T, const N: usize> Drop for BackshiftOnDrop<'_, T, N> {
    fn drop(&mut self) {
        if self.deleted > 0 {
            // SAFETY: `[processed, original_len)` is live and unvisited; the
            // destination `[processed - deleted, ..)` only overlaps vacated slots.
            unsafe {
                self.v.relocate(
                    self.processed,
                    self.processed - self.deleted,
                    self.original_len - self.processed,
                )
            };
        }
        self.v.len = self.original_len - self.deleted;
    }
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element exactly once, in order.
    /// Rejected elements are dropped in place.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](FixedVec::retain), but the predicate may mutate the elements.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let original_len = self.len;
        // Hidden from `Drop` until the guard restores it.
        self.len = 0;
        let mut g = BackshiftOnDrop {
            v: self,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while g.processed < original_len {
            let cur = g.processed;
            // SAFETY: `cur < original_len` and unvisited, so the slot is live.
            let keep = f(unsafe { &mut *g.v.as_mut_ptr().add(cur) });
            g.processed += 1;
            if !keep {
                g.deleted += 1;
                // SAFETY: the slot is live and now counted as processed, so the
                // guard never touches it again.
                unsafe { g.v.destroy_at(cur) };
            } else if g.deleted > 0 {
                // SAFETY: `cur - deleted` is a vacated slot.
                unsafe { g.v.relocate(cur, cur - g.deleted, 1) };
            }
        }
    }
}
