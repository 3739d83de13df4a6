//! # Writer options
//!
//! Every output operation is driven by a single [`WriterOptions`] value. It is `Copy` and
//! never mutated while writing, so the same options can be shared between threads that are
//! encoding different arrays or writing different files.
//!
//! ```
//! use vtu::{ByteOrder, Format, WriterOptions};
//!
//! let options = WriterOptions::binary()
//!     .with_byte_order(ByteOrder::BigEndian)
//!     .with_compression(false);
//!
//! assert_eq!(options.format, Format::Binary);
//! assert!(!options.compressed);
//! ```

use derive_more::Display;

/// the textual representation of every `DataArray` in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Format {
    /// whitespace separated decimal text
    #[display(fmt = "ascii")]
    Ascii,
    /// length prefixed, base64 encoded (and optionally compressed) bytes
    #[display(fmt = "binary")]
    Binary,
}

impl Format {
    /// value of the `format` attribute on a `DataArray` element
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Binary => "binary",
        }
    }
}

/// byte order applied to every multi-byte value, headers included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ByteOrder {
    #[display(fmt = "LittleEndian")]
    LittleEndian,
    #[display(fmt = "BigEndian")]
    BigEndian,
}

impl ByteOrder {
    /// value of the `byte_order` attribute on the `VTKFile` element
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LittleEndian => "LittleEndian",
            Self::BigEndian => "BigEndian",
        }
    }

    /// the byte order of the machine this is compiled for
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }
}

/// Configuration for a single write (or a single array encoding).
///
/// The defaults are binary output, little endian, compressed with zlib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WriterOptions {
    pub format: Format,
    pub byte_order: ByteOrder,
    /// only meaningful for [`Format::Binary`]
    pub compressed: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            format: Format::Binary,
            byte_order: ByteOrder::LittleEndian,
            compressed: true,
        }
    }
}

impl WriterOptions {
    pub fn new(format: Format, byte_order: ByteOrder, compressed: bool) -> Self {
        Self {
            format,
            byte_order,
            compressed,
        }
    }

    /// plain text output. Byte order and compression have no effect on the data arrays
    pub fn ascii() -> Self {
        Self::default().with_format(Format::Ascii)
    }

    /// compressed little endian binary output (same as `default()`)
    pub fn binary() -> Self {
        Self::default()
    }

    pub fn with_format(self, format: Format) -> Self {
        Self { format, ..self }
    }

    pub fn with_byte_order(self, byte_order: ByteOrder) -> Self {
        Self { byte_order, ..self }
    }

    pub fn with_compression(self, compressed: bool) -> Self {
        Self { compressed, ..self }
    }

    /// whether the arrays of this output actually run through the zlib compressor
    pub fn is_compressed_binary(&self) -> bool {
        self.format == Format::Binary && self.compressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_binary_compressed_little_endian() {
        let options = WriterOptions::default();
        assert_eq!(options.format, Format::Binary);
        assert_eq!(options.byte_order, ByteOrder::LittleEndian);
        assert!(options.compressed);
        assert!(options.is_compressed_binary());
    }

    #[test]
    fn ascii_is_never_compressed_binary() {
        let options = WriterOptions::ascii();
        assert!(options.compressed);
        assert!(!options.is_compressed_binary());
    }

    #[test]
    fn with_methods_return_new_values() {
        let base = WriterOptions::binary();
        let big = base.with_byte_order(ByteOrder::BigEndian);

        assert_eq!(base.byte_order, ByteOrder::LittleEndian);
        assert_eq!(big.byte_order, ByteOrder::BigEndian);
        assert_eq!(big.format, base.format);
    }

    #[test]
    fn attribute_strings() {
        assert_eq!(Format::Ascii.to_string(), "ascii");
        assert_eq!(Format::Binary.as_str(), "binary");
        assert_eq!(ByteOrder::BigEndian.to_string(), "BigEndian");
        assert_eq!(ByteOrder::LittleEndian.as_str(), "LittleEndian");
    }
}
