// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::DynArray;

impl<T: Default> DynArray<T> {
    /// Returns the live prefix as a shared slice (`&buf[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// Returns the live prefix as a mutable slice (`&mut buf[..len]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.as_mut_slice()[..len]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynArray;

    #[test]
    fn test_slices_are_restricted_to_len() {
        let mut v: DynArray<i32> = DynArray::with_capacity(8);
        v.push(1);
        v.push(2);
        assert_eq!(v.as_slice().len(), 2);
        assert_eq!(v.as_mut_slice().len(), 2);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_mut_slice_writes_through() {
        let mut v: DynArray<i32> = DynArray::from([1, 2, 3]);
        v.as_mut_slice()[1] = 20;
        assert_eq!(v.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn test_empty_slices() {
        let mut v: DynArray<i32> = DynArray::with_capacity(4);
        assert!(v.as_slice().is_empty());
        assert!(v.as_mut_slice().is_empty());
    }
}
