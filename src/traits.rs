//! # Traits
//!
//! [`Numeric`] describes the fixed width element types that can appear in a VTK
//! `DataArray`, and [`Array`] describes a whole array of them. Every array handed to
//! [`encode`](crate::encode) or written by [`write_vtu`](crate::write_vtu) goes through
//! these two traits.
//!
//! `Array` is implemented for slices and `Vec`s of `f64`, `i32`, `u8`, [`Point`](crate::Point)
//! and [`Vector`](crate::Vector). If you need to write a field stored in some other container
//! you can implement `Array` for it directly:
//!
//! ```
//! use vtu::{Array, ArrayKind, ByteOrder, Numeric};
//!
//! struct Pressure {
//!     values: Vec<f64>,
//! }
//!
//! impl Array for Pressure {
//!     fn kind(&self) -> ArrayKind {
//!         ArrayKind::Scalar
//!     }
//!
//!     fn length(&self) -> usize {
//!         self.values.len()
//!     }
//!
//!     fn write_ascii(&self, out: &mut String) {
//!         self.values.as_slice().write_ascii(out)
//!     }
//!
//!     fn write_bytes(&self, byte_order: ByteOrder, out: &mut Vec<u8>) {
//!         for value in &self.values {
//!             value.extend_bytes(byte_order, out);
//!         }
//!     }
//! }
//!
//! let pressure = Pressure { values: vec![1.0, 2.5] };
//! let encoded = vtu::encode(&pressure, &vtu::WriterOptions::ascii()).unwrap();
//! assert_eq!(encoded.text, "1.0 2.5");
//! ```

use crate::array::{ArrayKind, Precision};
use crate::ByteOrder;

use num_traits::ToBytes;
use std::fmt::Write as _;

/// A fixed width number that VTK understands.
pub trait Numeric: ToBytes + Copy + PartialEq + std::fmt::Debug {
    /// size of one element in bytes
    const SIZE: usize;

    /// the kind of array a sequence of these numbers forms
    const KIND: ArrayKind;

    fn as_precision() -> Precision {
        Self::KIND.precision()
    }

    /// append the bytes of this number to `out` in the given byte order
    fn extend_bytes(&self, byte_order: ByteOrder, out: &mut Vec<u8>) {
        match byte_order {
            ByteOrder::LittleEndian => out.extend_from_slice(self.to_le_bytes().as_ref()),
            ByteOrder::BigEndian => out.extend_from_slice(self.to_be_bytes().as_ref()),
        }
    }

    /// append the decimal text of this number to `out`
    fn push_ascii(&self, out: &mut String);
}

impl Numeric for f64 {
    const SIZE: usize = 8;
    const KIND: ArrayKind = ArrayKind::Scalar;

    fn push_ascii(&self, out: &mut String) {
        // ryu always keeps a fractional part, `200.0` instead of `200`
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(*self));
    }
}

impl Numeric for i32 {
    const SIZE: usize = 4;
    const KIND: ArrayKind = ArrayKind::Integer;

    fn push_ascii(&self, out: &mut String) {
        // writing to a String cannot fail
        let _ = write!(out, "{}", self);
    }
}

impl Numeric for u8 {
    const SIZE: usize = 1;
    const KIND: ArrayKind = ArrayKind::Byte;

    fn push_ascii(&self, out: &mut String) {
        let _ = write!(out, "{}", self);
    }
}

/// An array of values that can be rendered into the text of a `DataArray` element.
pub trait Array {
    /// which of the four VTK array kinds this is
    fn kind(&self) -> ArrayKind;

    /// number of tuples (points, vectors, or scalar values) in the array
    fn length(&self) -> usize;

    /// render every value as decimal text, separated by single spaces
    fn write_ascii(&self, out: &mut String);

    /// serialize every value into `out` with the given byte order
    fn write_bytes(&self, byte_order: ByteOrder, out: &mut Vec<u8>);

    fn components(&self) -> usize {
        self.kind().components()
    }

    fn precision(&self) -> Precision {
        self.kind().precision()
    }

    /// size of a single tuple in bytes
    fn size_of_elem(&self) -> usize {
        self.kind().size_of_elem()
    }

    /// exact number of bytes produced by `write_bytes`
    fn byte_len(&self) -> usize {
        self.length() * self.size_of_elem()
    }
}
