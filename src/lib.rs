#![doc = include_str!("../README.md")]

pub mod array;
pub mod codec;
pub mod mesh;
pub mod options;
pub mod prelude;
mod traits;
mod write_vtu;

pub use traits::{Array, Numeric};

pub use array::{ArrayKind, Precision};
pub use codec::{encode, EncodedArray};
pub use mesh::{Cell, CellType, FieldData, Point, ScalarData, UnstructuredGrid, Vector, VectorData};
pub use options::{ByteOrder, Format, WriterOptions};

pub use write_vtu::{to_vtu_string, write_inline_dataarray, write_vtu, write_vtu_file};

pub use quick_xml::writer::Writer;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not convert file to uf8 encoding: `{0}`")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Could not write XML data to file: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
    /// zlib reported a failure while compressing into memory. This is a bug, not a
    /// problem with the input data.
    #[error("Internal error while compressing a data array: `{0}`")]
    Compression(#[source] std::io::Error),
    #[error("A data array of {0} bytes does not fit in a UInt32 length header")]
    HeaderOverflow(usize),
}
