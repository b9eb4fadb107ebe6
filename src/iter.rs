// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynArray`](crate::DynArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&DynArray` and `&mut DynArray` iterate as slices; for an empty array
//!   `begin == end` falls out of the empty slice.

// Crate imports
use crate::array::DynArray;

// Core imports
use core::{iter::FusedIterator, mem};

/// Owned iterator returned by `DynArray::into_iter()`.
///
/// Yields elements by value from front to back, taking each one out of its
/// slot, and supports double-ended iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T: Default> {
    pub(crate) v: DynArray<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(mem::take(&mut self.v.as_mut_slice()[i]))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            return None;
        }
        let i = self.front + n; // safe: n < rem == back - front
        self.front = i + 1;
        Some(mem::take(&mut self.v.as_mut_slice()[i]))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            let i = self.back;
            Some(mem::take(&mut self.v.as_mut_slice()[i]))
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            None
        } else {
            self.back -= n + 1;
            let i = self.back;
            Some(mem::take(&mut self.v.as_mut_slice()[i]))
        }
    }
}
impl<T: Default> FusedIterator for IntoIter<T> {}
impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: Default> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T: Default> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Default> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            v: self,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynArray;

    #[test]
    fn test_double_ended_and_nth() {
        let v: DynArray<i32> = DynArray::from([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v: DynArray<i32> = DynArray::from([1, 2, 3, 4, 5]);
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 1 from back, take 3
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_size_hint_tracks_consumption() {
        let v: DynArray<i32> = DynArray::from([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.nth(0), Some(20));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_nth_overflow_drains() {
        let v: DynArray<i32> = DynArray::from([10, 20, 30]);
        let mut it = v.into_iter();
        assert_eq!(it.nth(3), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_nth_back_exactly_remaining_branch() {
        let v: DynArray<i32> = DynArray::from([1, 2]);
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(2), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_into_iter_moves_non_copy_elements() {
        let mut v: DynArray<String> = DynArray::new();
        v.push("a".to_string());
        v.push("b".to_string());
        let collected: Vec<String> = v.into_iter().collect();
        assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_into_iter_empty() {
        let v: DynArray<u8> = DynArray::new();
        let mut it = v.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_shared_ref() {
        let v: DynArray<i32> = DynArray::from([1, 2, 3]);
        let mut collected = Vec::new();
        for x in &v {
            collected.push(*x);
        }
        assert_eq!(collected, vec![1, 2, 3]);
        // original must remain unchanged
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_into_iter_mutable_ref() {
        let mut v: DynArray<i32> = DynArray::from([1, 2, 3]);
        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_into_iter_refs_empty() {
        let mut v: DynArray<i32> = DynArray::new();
        assert_eq!((&v).into_iter().count(), 0);
        assert_eq!((&mut v).into_iter().count(), 0);
    }

    #[test]
    fn test_iter_and_iter_mut() {
        let mut v: DynArray<i32> = DynArray::from([1, 2, 3, 4]);

        let collected: Vec<_> = v.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);

        for x in v.iter_mut() {
            *x *= 2;
        }
        assert_eq!(v.as_slice(), &[2, 4, 6, 8]);
        assert_eq!(v.len(), 4);
    }
}
