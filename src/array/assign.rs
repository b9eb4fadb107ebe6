// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Core imports
use core::mem;

// Crate imports
use crate::array::{relocate, DynArray};

impl<T: Default + Clone> Clone for DynArray<T> {
    /// Deep-copies the live elements into a fresh buffer of the source's
    /// **capacity** (not just its length).
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        let len = self.len;
        out.buf.as_mut_slice()[..len].clone_from_slice(self.as_slice());
        out.len = len;
        out
    }

    /// Copy-assignment with storage reuse.
    ///
    /// Reuses the existing buffer when `self.len > source.len` or
    /// `self.capacity >= source.capacity`; otherwise reallocates to exactly
    /// `source.capacity` first. Either way, `source.len` elements are
    /// deep-copied and `self.len` becomes `source.len`.
    fn clone_from(&mut self, source: &Self) {
        let reuse = self.len > source.len || self.capacity() >= source.capacity();
        if !reuse {
            // Old elements drop with the returned buffer.
            let _ = self.realloc(source.capacity());
        }
        let len = source.len;
        self.buf.as_mut_slice()[..len].clone_from_slice(source.as_slice());
        self.len = len;
    }
}

impl<T: Default> DynArray<T> {
    /// Moves the whole container out, leaving `self` empty with
    /// `len == 0` and `capacity == 0`. O(1).
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Move-assignment with storage reuse.
    ///
    /// Applies the same reuse-vs-reallocate decision as
    /// [`Clone::clone_from`], but relocates (moves) the source's elements
    /// instead of copying them and then zeroes `source.len`. The source's
    /// buffer itself is never swapped out, so its capacity is unchanged in
    /// both branches.
    pub fn take_from(&mut self, source: &mut Self) {
        let reuse = self.len > source.len || self.capacity() >= source.capacity();
        if !reuse {
            let _ = self.realloc(source.capacity());
        }
        let len = source.len;
        relocate(
            &mut self.buf.as_mut_slice()[..len],
            &mut source.buf.as_mut_slice()[..len],
        );
        self.len = len;
        source.len = 0;
    }
}
