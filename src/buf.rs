// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw owning buffer underneath [`DynArray`](crate::DynArray).
//!
//! [`OwnedBuf<T>`] owns exactly `capacity` contiguous, default-initialized
//! slots of `T` on the heap. It is move-only (no `Clone`), its storage is
//! released exactly once on drop, and ownership can be exchanged between two
//! buffers in O(1) via [`swap`](OwnedBuf::swap). It knows nothing about a
//! logical length; the length/capacity split lives in the container.

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::mem;

/// An exclusively-owned contiguous block of `capacity` slots of `T`.
///
/// Every slot is default-initialized at allocation time, so the buffer is
/// always fully valid and no slot is ever observed uninitialized.
pub(crate) struct OwnedBuf<T> {
    slots: Box<[T]>,
}

impl<T> OwnedBuf<T> {
    /// An empty buffer. Does not allocate.
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new().into_boxed_slice(),
        }
    }

    /// Number of owned slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Exchanges ownership of the storage with `other` in O(1).
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }

    /// All `capacity` slots as a shared slice.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All `capacity` slots as a mutable slice.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T: Default> OwnedBuf<T> {
    /// Allocates a buffer of exactly `capacity` default-initialized slots.
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}
