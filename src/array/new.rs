// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynArray, buf::OwnedBuf};

impl<T: Default> Default for DynArray<T> {
    fn default() -> Self {
        Self {
            buf: OwnedBuf::new(),
            len: 0,
        }
    }
}

impl<T: Default> DynArray<T> {
    /// Constructs an empty array. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty array backed by exactly `capacity` slots.
    ///
    /// This is the reservation constructor: `len` starts at 0 and the
    /// first `capacity` pushes will not reallocate.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: OwnedBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Constructs an array of `len` default-valued elements, with
    /// `capacity == len`.
    #[inline]
    pub fn with_len(len: usize) -> Self {
        // The buffer default-initializes its slots, so they are already
        // the element values.
        Self {
            buf: OwnedBuf::with_capacity(len),
            len,
        }
    }
}

impl<T: Default + Clone> DynArray<T> {
    /// Constructs an array of `len` clones of `value`, with
    /// `capacity == len`.
    pub fn from_elem(len: usize, value: T) -> Self {
        let mut out = Self::with_capacity(len);
        for slot in out.buf.as_mut_slice() {
            *slot = value.clone();
        }
        out.len = len;
        out
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(src: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        for (slot, value) in out.buf.as_mut_slice().iter_mut().zip(src) {
            *slot = value;
        }
        out.len = N;
        out
    }
}

impl<T: Default + Clone> From<&[T]> for DynArray<T> {
    fn from(src: &[T]) -> Self {
        let mut out = Self::with_capacity(src.len());
        out.buf.as_mut_slice().clone_from_slice(src);
        out.len = src.len();
        out
    }
}
