// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::DynArray;

impl<T: Default> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let wanted = self.len + lower;
        self.reserve(wanted);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Default> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T: Default + Clone> DynArray<T> {
    /// Appends clones of all elements of `src`, reserving once up front.
    pub fn extend_from_slice(&mut self, src: &[T]) {
        let len = self.len;
        self.reserve(len + src.len());
        self.buf.as_mut_slice()[len..len + src.len()].clone_from_slice(src);
        self.len = len + src.len();
    }
}
