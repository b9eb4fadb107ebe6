// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynArray` type and its inherent API.
//!
//! `DynArray<T>` is a growable dynamic array layered on an exclusively-owned
//! heap buffer. It tracks a logical length over a buffer of `capacity`
//! default-initialized slots, grows by a fixed factor of 2, and exposes the
//! capacity/length split directly in its API.
//!
//! The implementation is entirely safe Rust.

mod assign;
mod extend;
mod new;
mod pop;
mod push;
mod resize;
mod slice;

// Crate imports
use crate::{buf::OwnedBuf, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
};

/// A growable, heap-backed dynamic array with explicit capacity control.
///
/// `DynArray<T>` owns a contiguous buffer of `capacity` default-initialized
/// slots and tracks a logical length `len ∈ 0..=capacity`. Only the prefix
/// `buf[..len]` is visible through the safe API: [`as_slice`], indexing, and
/// iteration are all restricted to it.
///
/// # Layout and invariants
///
/// - `len <= capacity` always.
/// - Slots in `[len, capacity)` hold default or stale values and are never
///   exposed.
/// - Exactly one `DynArray` owns its buffer; ownership moves atomically on
///   a Rust move, [`swap`](DynArray::swap), or [`take`](DynArray::take),
///   leaving a taken-from container at `len == 0`, `capacity == 0`.
/// - Reallocation is the only operation that replaces the buffer. Borrowed
///   element references cannot outlive it: any capacity-changing call takes
///   `&mut self`, so the borrow checker ends all outstanding borrows first.
///
/// # Growth
///
/// A capacity-exhausted [`push`](DynArray::push) or
/// [`insert`](DynArray::insert) grows the buffer to
/// [`GROWTH_FACTOR`](Self::GROWTH_FACTOR)` * capacity` (an empty buffer grows
/// to 1). [`resize`](DynArray::resize) past capacity grows to exactly
/// `GROWTH_FACTOR * new_len`, and [`reserve`](DynArray::reserve) to exactly
/// the requested capacity. Growth allocates the new buffer in full before
/// releasing the old one, so the container stays consistent if allocation
/// fails.
///
/// # Complexity characteristics
///
/// - `push` is amortized O(1), worst case O(len) on reallocation.
/// - `insert` and `remove` are O(len) due to shifting.
/// - `pop`, `clear`, `truncate`, a shrinking `resize`, `swap`, and `take`
///   are O(1).
/// - `clone_from` and `take_from` are O(source len), plus a reallocation
///   when the receiver's storage cannot be reused.
///
/// # Element bounds
///
/// `DynArray<T>` is only defined for `T: Default`: the buffer
/// default-initializes its slots, and shrinking operations leave vacated
/// slots holding a default value instead of reading them back. Operations
/// that duplicate elements ([`Clone`], [`from_elem`](DynArray::from_elem),
/// [`extend_from_slice`](DynArray::extend_from_slice), `From<&[T]>`)
/// additionally require `T: Clone`.
///
/// # Example
///
/// ```rust
/// use dyn_array::DynArray;
///
/// let mut v: DynArray<i32> = DynArray::with_capacity(2);
/// assert_eq!((v.len(), v.capacity()), (0, 2));
/// v.push(1);
/// v.push(2);
/// v.push(3); // grows 2 -> 4
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct DynArray<T: Default> {
    pub(crate) buf: OwnedBuf<T>,
    pub(crate) len: usize,
}

impl<T: Default> DynArray<T> {
    /// Multiplier applied to the capacity when a full buffer must grow.
    pub const GROWTH_FACTOR: usize = 2;

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the room left before the next reallocation.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        (i < self.len).then(|| &self.as_slice()[i])
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        (i < self.len).then(|| &mut self.as_mut_slice()[i])
    }

    /// Checked access: a reference to the element at `index`, or
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        if index < self.len {
            Ok(&self.as_slice()[index])
        } else {
            Err(Error::OutOfBounds)
        }
    }

    /// Checked access: a mutable reference to the element at `index`, or
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index < self.len {
            Ok(&mut self.as_mut_slice()[index])
        } else {
            Err(Error::OutOfBounds)
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

    /// Returns `true` if the live prefix contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Sets `len = 0` without touching the storage or its capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// O(1) exchange of buffer ownership and length with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Swaps in a fresh buffer of `max(1, new_capacity)` slots and returns
    /// the old one with the elements still inside; callers relocate what
    /// they need out of it before it drops.
    pub(crate) fn realloc(&mut self, new_capacity: usize) -> OwnedBuf<T> {
        let mut fresh = OwnedBuf::with_capacity(new_capacity.max(1));
        self.buf.swap(&mut fresh);
        fresh
    }
}

/// Moves elements out of `src` into `dst`, slot by slot, leaving defaults
/// behind. Both slices must have the same length.
pub(crate) fn relocate<T: Default>(dst: &mut [T], src: &mut [T]) {
    debug_assert_eq!(dst.len(), src.len());
    for (dst, src) in dst.iter_mut().zip(src) {
        *dst = mem::take(src);
    }
}

impl<T: Default + fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Comparisons delegate to the live slice. Slice equality checks lengths
// before elements; slice ordering is lexicographic.
impl<T: Default + PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Default + Eq> Eq for DynArray<T> {}
impl<T: Default + Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Default + PartialOrd> PartialOrd for DynArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Default + Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Default> Deref for DynArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T: Default> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Default> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Default> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T: Default> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Default> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
