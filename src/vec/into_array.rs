// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> FixedVec<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns [`Error::InvalidLen`].
    ///
    /// The elements are moved out; nothing is cloned. On error the vector is dropped.
    #[inline]
    pub fn try_into_array(self) -> Result<[T; N], Error> {
        if self.len != N {
            return Err(Error::InvalidLen);
        }

        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so reading the arena out moves it.
        let buf = unsafe { ptr::read(&this.buf) };
        // SAFETY: `len == N`, so every slot is live.
        Ok(buf.map(|slot| unsafe { slot.assume_init() }))
    }
}
