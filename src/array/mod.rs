//! Array kinds and the [`Array`](crate::Array) implementations for the containers
//! used by [`UnstructuredGrid`](crate::UnstructuredGrid)

mod numeric;
mod vector;

use derive_more::Display;

/// The four kinds of arrays that make up an unstructured grid file.
///
/// The document writer uses this to pick the `type` and `NumberOfComponents`
/// attributes of each `DataArray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ArrayKind {
    /// one `Float64` per tuple (scalar fields)
    #[display(fmt = "scalar")]
    Scalar,
    /// three `Float64` per tuple (vector fields and point coordinates)
    #[display(fmt = "vector")]
    Vector,
    /// one `Int32` per tuple (cell connectivity and offsets)
    #[display(fmt = "integer")]
    Integer,
    /// one `UInt8` per tuple (cell types)
    #[display(fmt = "byte")]
    Byte,
}

impl ArrayKind {
    pub fn precision(&self) -> Precision {
        match self {
            Self::Scalar | Self::Vector => Precision::Float64,
            Self::Integer => Precision::Int32,
            Self::Byte => Precision::UInt8,
        }
    }

    pub fn components(&self) -> usize {
        match self {
            Self::Vector => 3,
            _ => 1,
        }
    }

    /// size of a full tuple in bytes
    pub fn size_of_elem(&self) -> usize {
        self.precision().size() * self.components()
    }
}

/// element type of a `DataArray`, written to its `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Precision {
    #[display(fmt = "Float64")]
    Float64,
    #[display(fmt = "Int32")]
    Int32,
    #[display(fmt = "UInt8")]
    UInt8,
}

impl Precision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float64 => "Float64",
            Self::Int32 => "Int32",
            Self::UInt8 => "UInt8",
        }
    }

    /// width of a single component in bytes
    pub fn size(&self) -> usize {
        match self {
            Self::Float64 => 8,
            Self::Int32 => 4,
            Self::UInt8 => 1,
        }
    }
}

/// Append the ascii text of each value to `out`, joined by a single space.
pub(crate) fn push_separated<T, I, F>(out: &mut String, values: I, mut push: F)
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, &mut String),
{
    let mut first = true;

    for value in values {
        if !first {
            out.push(' ');
        }
        first = false;
        push(value, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_widths() {
        assert_eq!(ArrayKind::Scalar.size_of_elem(), 8);
        assert_eq!(ArrayKind::Vector.size_of_elem(), 24);
        assert_eq!(ArrayKind::Integer.size_of_elem(), 4);
        assert_eq!(ArrayKind::Byte.size_of_elem(), 1);
    }

    #[test]
    fn type_tags() {
        assert_eq!(ArrayKind::Vector.precision().as_str(), "Float64");
        assert_eq!(ArrayKind::Integer.precision().to_string(), "Int32");
        assert_eq!(ArrayKind::Byte.precision().as_str(), "UInt8");
        assert_eq!(ArrayKind::Vector.components(), 3);
        assert_eq!(ArrayKind::Scalar.components(), 1);
    }
}
