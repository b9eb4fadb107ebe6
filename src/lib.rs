// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dyn-array`
//!
//! A `no_std` (plus `alloc`), growable, heap-backed dynamic array with
//! explicit capacity control, **with no `unsafe` anywhere**.
//!
//! The core type, [`DynArray<T>`], owns a contiguous heap buffer of
//! `capacity` default-initialized slots and tracks a logical length
//! `len ∈ 0..=capacity`. Only the prefix `[0..len)` is visible through the
//! safe API; the tail holds default or stale values that are never exposed.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want the capacity/length split to be an explicit, observable part
//!   of the API (exact reservation, a fixed ×2 growth factor, documented
//!   reuse-vs-reallocate behavior on assignment).
//! - You want a fully safe implementation you can read end to end.
//! - You are in a `no_std` environment with an allocator.
//!
//! It may not be the best fit if:
//!
//! - You just need a general-purpose growable vector — use
//!   [`alloc::vec::Vec`].
//! - Your element types cannot implement [`Default`] (the buffer
//!   default-initializes its slots, so `T: Default` is required).
//!
//! ## Growth and capacity
//!
//! - [`push`](DynArray::push) and [`insert`](DynArray::insert) grow a full
//!   buffer to `2 * capacity` (an empty buffer grows to 1), giving
//!   amortized O(1) append.
//! - [`resize`](DynArray::resize) past capacity reallocates to exactly
//!   `2 * new_len`.
//! - [`reserve`](DynArray::reserve) reallocates to exactly the requested
//!   capacity and never shrinks.
//! - [`DynArray::with_capacity`] pre-allocates without populating elements.
//! - Reallocation is the only operation that replaces the backing buffer;
//!   shrinking operations ([`pop`](DynArray::pop),
//!   [`truncate`](DynArray::truncate), [`clear`](DynArray::clear), a
//!   shrinking [`resize`](DynArray::resize)) only move the logical length.
//!
//! ## Assignment semantics
//!
//! [`Clone::clone_from`] and [`DynArray::take_from`] reuse the receiver's
//! storage when it is already big enough (`self.len() > source.len()` or
//! `self.capacity() >= source.capacity()`) and reallocate to exactly the
//! source's capacity otherwise. [`DynArray::take`] transfers the whole
//! container out, leaving `len == 0` and `capacity == 0` behind.
//!
//! ## Errors and panics
//!
//! The only recoverable error in the crate is [`Error::OutOfBounds`],
//! returned by the checked accessors [`at`](DynArray::at) /
//! [`at_mut`](DynArray::at_mut). Everything else follows slice semantics:
//!
//! - Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//!   inverted ranges, exactly like built-in slices.
//! - [`insert`](DynArray::insert) panics when the position exceeds `len`.
//! - [`pop`](DynArray::pop) and [`remove`](DynArray::remove) on an empty
//!   container are defined no-ops returning `None`.
//!
//! Allocation failure propagates from `alloc` untouched; the container is
//! never left in a partial state because a new buffer is always fully
//! allocated before the old one is released.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `DynArray<T>` as a plain
//!     sequence of the live elements.
//!
//! ## Example
//!
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut v: DynArray<u8> = DynArray::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4); // 0 -> 1 -> 2 -> 4
//! ```
//!
//! See [`DynArray`] for detailed semantics, complexity, and limitations.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod array;
mod buf;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use array::DynArray;
pub use error::Error;
pub use iter::IntoIter;
