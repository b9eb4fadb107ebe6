// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::{relocate, DynArray};

impl<T: Default> DynArray<T> {
    /// Resizes the array to `new_len`.
    ///
    /// - `new_len <= len`: shrinks the logical length only.
    /// - `len < new_len <= capacity`: default-fills `[len..new_len)` in
    ///   place, no reallocation.
    /// - `new_len > capacity`: reallocates to exactly
    ///   `GROWTH_FACTOR * new_len`, relocates the live elements, then
    ///   default-fills the newly exposed slots.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.len {
            self.len = new_len;
            return;
        }

        if new_len <= self.capacity() {
            let len = self.len;
            // Slots past len may hold stale values from an earlier shrink.
            for slot in &mut self.buf.as_mut_slice()[len..new_len] {
                *slot = T::default();
            }
            self.len = new_len;
            return;
        }

        let len = self.len;
        let mut old = self.realloc(Self::GROWTH_FACTOR * new_len);
        let slots = self.buf.as_mut_slice();
        relocate(&mut slots[..len], &mut old.as_mut_slice()[..len]);
        for slot in &mut slots[len..new_len] {
            *slot = T::default();
        }
        self.len = new_len;
    }

    /// Reallocates to exactly `new_capacity` when it exceeds the current
    /// capacity, relocating the live elements; otherwise a no-op. Never
    /// shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        let len = self.len;
        let mut old = self.realloc(new_capacity);
        relocate(
            &mut self.buf.as_mut_slice()[..len],
            &mut old.as_mut_slice()[..len],
        );
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynArray;

    #[test]
    fn test_resize_shrink_preserves_prefix() {
        let mut v: DynArray<i32> = DynArray::from([1, 2, 3, 4, 5]);
        v.resize(2);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_resize_within_capacity_default_fills() {
        let mut v: DynArray<i32> = DynArray::with_capacity(6);
        v.push(1);
        v.push(2);
        let cap = v.capacity();

        v.resize(5);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0]);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn test_resize_at_exact_capacity_does_not_reallocate() {
        let mut v: DynArray<i32> = DynArray::with_capacity(4);
        v.push(9);
        v.resize(4);
        assert_eq!(v.as_slice(), &[9, 0, 0, 0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_resize_past_capacity_grows_to_twice_new_len() {
        let mut v: DynArray<i32> = DynArray::from([1, 2]);
        v.resize(5);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0]);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_resize_after_shrink_exposes_defaults_not_stale_values() {
        let mut v: DynArray<i32> = DynArray::from([7, 8, 9]);
        v.resize(1);
        v.resize(3);
        assert_eq!(v.as_slice(), &[7, 0, 0]);
    }

    #[test]
    fn test_resize_to_same_len_is_noop() {
        let mut v: DynArray<i32> = DynArray::from([1, 2, 3]);
        v.resize(3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_resize_from_empty() {
        let mut v: DynArray<i32> = DynArray::new();
        v.resize(3);
        assert_eq!(v.as_slice(), &[0, 0, 0]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_reserve_grows_to_exact_capacity() {
        let mut v: DynArray<i32> = DynArray::from([1, 2, 3]);
        v.reserve(11);
        assert_eq!(v.capacity(), 11);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_reserve_smaller_or_equal_is_noop() {
        let mut v: DynArray<i32> = DynArray::with_capacity(8);
        v.push(1);
        v.reserve(8);
        assert_eq!(v.capacity(), 8);
        v.reserve(3);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_reserve_then_push_does_not_reallocate() {
        let mut v: DynArray<i32> = DynArray::new();
        v.reserve(4);
        for k in 1..=4 {
            v.push(k);
            assert_eq!(v.capacity(), 4);
        }
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_reserve_non_copy_elements_survive() {
        let mut v: DynArray<String> = DynArray::new();
        v.push("x".to_string());
        v.push("y".to_string());
        v.reserve(32);
        assert_eq!(v.as_slice(), &["x", "y"]);
        assert_eq!(v.capacity(), 32);
    }
}
