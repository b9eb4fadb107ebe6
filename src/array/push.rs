// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::{relocate, DynArray};

impl<T: Default> DynArray<T> {
    /// Appends `value` at the back.
    ///
    /// Writes into the spare slot when one exists. When full, grows the
    /// buffer to `GROWTH_FACTOR * capacity` (0 grows to 1) and relocates the
    /// existing elements first. Amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.len < self.capacity() {
            let len = self.len;
            self.buf.as_mut_slice()[len] = value;
            self.len = len + 1;
            return;
        }

        let len = self.len;
        let new_capacity = Self::GROWTH_FACTOR * self.capacity();
        let mut old = self.realloc(new_capacity);
        relocate(
            &mut self.buf.as_mut_slice()[..len],
            &mut old.as_mut_slice()[..len],
        );
        self.buf.as_mut_slice()[len] = value;
        self.len = len + 1;
    }

    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the
    /// right, and returns a reference to the inserted element.
    ///
    /// Grows exactly like [`push`](Self::push) when full. The in-place shift
    /// runs back to front via element swaps, so the overlapping ranges are
    /// handled safely. O(len).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. Position validity is the caller's
    /// responsibility, as with slice indexing; only
    /// [`at`](Self::at)/[`at_mut`](Self::at_mut) report a recoverable error.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );
        let len = self.len;

        if len < self.capacity() {
            let slots = self.buf.as_mut_slice();
            // Shift right: [index..len) -> [index+1..len+1)
            for i in (index..len).rev() {
                slots.swap(i, i + 1);
            }
            slots[index] = value;
            self.len = len + 1;
            return &mut slots[index];
        }

        let new_capacity = Self::GROWTH_FACTOR * self.capacity();
        let mut old = self.realloc(new_capacity);
        let src = old.as_mut_slice();
        let slots = self.buf.as_mut_slice();
        relocate(&mut slots[..index], &mut src[..index]);
        relocate(&mut slots[index + 1..len + 1], &mut src[index..len]);
        slots[index] = value;
        self.len = len + 1;
        &mut slots[index]
    }
}
