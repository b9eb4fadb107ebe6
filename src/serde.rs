// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynArray`](crate::DynArray).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence, growing as needed; the
//!   deserializer's size hint seeds the initial reservation.
//!
//! Capacity is not serialized: it is a storage detail, not part of the
//! value, so a round trip may report a different capacity than the
//! original.

// Crate imports
use crate::array::DynArray;

// Core imports
use core::fmt;

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Default + Serialize> Serialize for DynArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ArrayVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = DynArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = DynArray::<T>::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for DynArray<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T>(core::marker::PhantomData))
    }
}
