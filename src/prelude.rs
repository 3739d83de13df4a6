//! Common traits and types that are useful for working with `vtu`
#![allow(unused_imports)]

pub use crate::mesh::{Cell, CellType, FieldData, Point, ScalarData, UnstructuredGrid, Vector, VectorData};
pub use crate::options::{ByteOrder, Format, WriterOptions};
pub use crate::traits::{Array, Numeric};
pub use crate::Writer;

pub(crate) use crate::array::{self, ArrayKind, Precision};
pub(crate) use crate::Error;
