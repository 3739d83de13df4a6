//! # Data array encoding
//!
//! Everything that turns an [`Array`](crate::Array) into the text content of a `DataArray`
//! element lives here. For [`Format::Ascii`](crate::Format::Ascii) that is just the values
//! separated by spaces. For [`Format::Binary`](crate::Format::Binary) the pipeline is
//!
//! 1. [`encode_bytes`]: serialize the values in the requested byte order
//! 2. [`compress_block`]: (only if compression is enabled) zlib the whole payload as one block
//! 3. [`Header`]: build the `UInt32` length header
//! 4. [`encode_text`]: base64 the header and the payload separately and concatenate them
//!
//! ```
//! use vtu::{ArrayKind, ByteOrder, WriterOptions};
//!
//! let connectivity = vec![0i32, 1, 4];
//!
//! let options = WriterOptions::binary()
//!     .with_byte_order(ByteOrder::LittleEndian)
//!     .with_compression(false);
//! let encoded = vtu::encode(&connectivity, &options).unwrap();
//!
//! assert_eq!(encoded.kind, ArrayKind::Integer);
//! assert_eq!(encoded.text, "DAAAAA==AAAAAAEAAAAEAAAA");
//!
//! let encoded = vtu::encode(&connectivity, &WriterOptions::ascii()).unwrap();
//! assert_eq!(encoded.text, "0 1 4");
//! ```
//!
//! Every call is independent: no state is shared between encodings and the compressor is
//! created and dropped inside each call, so arrays can be encoded from multiple threads.

mod bytes;
mod compress;
mod header;
mod text;

pub use bytes::encode_bytes;
pub use compress::compress_block;
pub use header::Header;
pub use text::encode_text;

use crate::prelude::*;

/// The text of a single `DataArray` and what is needed to describe it in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArray {
    pub kind: ArrayKind,
    pub format: Format,
    pub text: String,
}

impl EncodedArray {
    /// value of the `type` attribute
    pub fn precision(&self) -> Precision {
        self.kind.precision()
    }

    /// value of the `NumberOfComponents` attribute
    pub fn components(&self) -> usize {
        self.kind.components()
    }
}

/// Render `array` as the text content of a `DataArray` element
pub fn encode<A: Array + ?Sized>(array: &A, options: &WriterOptions) -> Result<EncodedArray, Error> {
    let text = match options.format {
        Format::Ascii => encode_ascii(array),
        Format::Binary => encode_binary(array, options.byte_order, options.compressed)?,
    };

    Ok(EncodedArray {
        kind: array.kind(),
        format: options.format,
        text,
    })
}

/// all values as decimal text, separated by single spaces
pub fn encode_ascii<A: Array + ?Sized>(array: &A) -> String {
    let mut text = String::new();
    array.write_ascii(&mut text);
    text
}

/// header + payload as base64, optionally compressing the payload
pub fn encode_binary<A: Array + ?Sized>(
    array: &A,
    byte_order: ByteOrder,
    compressed: bool,
) -> Result<String, Error> {
    let payload = encode_bytes(array, byte_order);

    let text = if compressed {
        let deflated = compress_block(&payload)?;
        let header = Header::compressed(payload.len(), deflated.len())?;
        encode_text(&header.to_bytes(byte_order), &deflated)
    } else {
        let header = Header::uncompressed(payload.len())?;
        encode_text(&header.to_bytes(byte_order), &payload)
    };

    Ok(text)
}
