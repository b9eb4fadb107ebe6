// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Core imports
use core::mem;

// Crate imports
use crate::array::DynArray;

impl<T: Default> DynArray<T> {
    /// Removes and returns the last element, or `None` if empty.
    ///
    /// Calling this on an empty array is a defined no-op, not an error.
    /// Capacity is never shrunk.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            let len = self.len;
            Some(mem::take(&mut self.buf.as_mut_slice()[len]))
        }
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left. Returns `None` when `index >= len`, which
    /// covers the empty array as a defined no-op. O(len).
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;
        let slots = self.buf.as_mut_slice();
        let removed = mem::take(&mut slots[index]);
        // Shift left: [index+1..len) -> [index..len-1)
        for i in index..len - 1 {
            slots.swap(i, i + 1);
        }
        self.len = len - 1;
        Some(removed)
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    /// Capacity and storage are untouched.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }
}
