// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynArray`.
//!
//! The only recoverable error is a bounds condition from the checked
//! accessors. It is `Copy` and implements `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`DynArray`](crate::DynArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index was not less than the current logical length.
    ///
    /// Returned by [`DynArray::at`](crate::DynArray::at) and
    /// [`DynArray::at_mut`](crate::DynArray::at_mut).
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }
}
