//! # Unstructured meshes
//!
//! An [`UnstructuredGrid`] is a list of [`Point`]s, a list of [`Cell`]s that reference those
//! points by index, and optional field data attached to either. Field data comes in two
//! flavors: [`ScalarData`] (one `f64` per point / cell) and [`VectorData`] (one [`Vector`]
//! per point / cell).
//!
//! ```
//! use vtu::{Cell, CellType, Point, ScalarData, UnstructuredGrid};
//!
//! let points = vec![
//!     Point::new(2.0, 3.0, 0.0),
//!     Point::new(5.0, 3.0, 0.0),
//!     Point::new(4.0, 5.0, 0.0),
//! ];
//! let cells = vec![Cell::new(vec![0, 1, 2], CellType::Triangle)];
//!
//! let grid = UnstructuredGrid::new(points, cells)
//!     .with_point_scalars(ScalarData::new("Temperature", vec![200.0, 300.0, 250.0]));
//!
//! assert_eq!(grid.offsets(), vec![3]);
//! assert_eq!(grid.types(), vec![5]);
//! ```
//!
//! None of these types check the topology they describe. A cell referencing a point that
//! does not exist, or a field with the wrong number of values, is written as given.

use derive_more::Constructor;

/// location of a mesh vertex
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Point {
    fn from(x: [f64; 3]) -> Self {
        Self::new(x[0], x[1], x[2])
    }
}

/// a three component value attached to a point or a cell
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector {
    fn from(x: [f64; 3]) -> Self {
        Self::new(x[0], x[1], x[2])
    }
}

/// The cell types VTK knows about, with their identifiers as stored in the `types` array.
///
/// For the vertex ordering of each type see `vtkCellType.h` or the VTK file format
/// documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellType {
    Vertex = 1,
    PolyVertex = 2,
    Line = 3,
    PolyLine = 4,
    Triangle = 5,
    TriangleStrip = 6,
    Polygon = 7,
    Pixel = 8,
    Quad = 9,
    Tetra = 10,
    Voxel = 11,
    Hexahedron = 12,
    Wedge = 13,
    Pyramid = 14,
    QuadraticEdge = 21,
    QuadraticTriangle = 22,
    QuadraticQuad = 23,
    QuadraticTetra = 24,
    QuadraticHexahedron = 25,
}

impl CellType {
    /// the VTK identifier of this cell type
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

/// a single cell: indices into the point list and the shape they form
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Cell {
    pub connectivity: Vec<i32>,
    pub cell_type: CellType,
}

/// a named scalar field
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarData {
    pub name: String,
    pub values: Vec<f64>,
}

impl ScalarData {
    pub fn new<T: Into<String>>(name: T, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// a named vector field
#[derive(Debug, Clone, PartialEq)]
pub struct VectorData {
    pub name: String,
    pub vectors: Vec<Vector>,
}

impl VectorData {
    pub fn new<T: Into<String>>(name: T, vectors: Vec<Vector>) -> Self {
        Self {
            name: name.into(),
            vectors,
        }
    }
}

/// All the fields attached to either the points or the cells of a grid.
///
/// Empty collections simply produce an empty `<PointData>` / `<CellData>` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldData {
    pub scalars: Vec<ScalarData>,
    pub vectors: Vec<VectorData>,
}

impl FieldData {
    pub fn new(scalars: Vec<ScalarData>, vectors: Vec<VectorData>) -> Self {
        Self { scalars, vectors }
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.vectors.is_empty()
    }
}

/// Full description of a single piece unstructured grid. This is what
/// [`write_vtu`](crate::write_vtu) writes to a file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnstructuredGrid {
    pub points: Vec<Point>,
    pub cells: Vec<Cell>,
    pub point_data: FieldData,
    pub cell_data: FieldData,
}

impl UnstructuredGrid {
    /// a grid without any field data
    pub fn new(points: Vec<Point>, cells: Vec<Cell>) -> Self {
        Self {
            points,
            cells,
            point_data: FieldData::default(),
            cell_data: FieldData::default(),
        }
    }

    pub fn with_point_data(self, point_data: FieldData) -> Self {
        Self { point_data, ..self }
    }

    pub fn with_cell_data(self, cell_data: FieldData) -> Self {
        Self { cell_data, ..self }
    }

    pub fn with_point_scalars(mut self, scalars: ScalarData) -> Self {
        self.point_data.scalars.push(scalars);
        self
    }

    pub fn with_point_vectors(mut self, vectors: VectorData) -> Self {
        self.point_data.vectors.push(vectors);
        self
    }

    pub fn with_cell_scalars(mut self, scalars: ScalarData) -> Self {
        self.cell_data.scalars.push(scalars);
        self
    }

    pub fn with_cell_vectors(mut self, vectors: VectorData) -> Self {
        self.cell_data.vectors.push(vectors);
        self
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// the connectivity of every cell, one after another
    pub fn connectivity(&self) -> Vec<i32> {
        self.cells
            .iter()
            .flat_map(|cell| cell.connectivity.iter().copied())
            .collect()
    }

    /// the index one past the last connectivity entry of each cell
    pub fn offsets(&self) -> Vec<i32> {
        self.cells
            .iter()
            .scan(0i32, |end, cell| {
                *end += cell.connectivity.len() as i32;
                Some(*end)
            })
            .collect()
    }

    /// the VTK type identifier of every cell
    pub fn types(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.cell_type.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cells() -> UnstructuredGrid {
        let points = vec![
            Point::new(2., 3., 0.),
            Point::new(5., 3., 0.),
            Point::new(6., 4., 0.),
            Point::new(5.5, 5.2, 0.),
            Point::new(4., 5., 0.),
        ];
        let cells = vec![
            Cell::new(vec![0, 1, 4], CellType::Triangle),
            Cell::new(vec![1, 2, 3, 4], CellType::Quad),
        ];

        UnstructuredGrid::new(points, cells)
    }

    #[test]
    fn derived_cell_arrays() {
        let grid = two_cells();

        assert_eq!(grid.connectivity(), vec![0, 1, 4, 1, 2, 3, 4]);
        assert_eq!(grid.offsets(), vec![3, 7]);
        assert_eq!(grid.types(), vec![5, 9]);
    }

    #[test]
    fn no_cells_gives_empty_arrays() {
        let grid = UnstructuredGrid::new(vec![Point::default()], vec![]);

        assert!(grid.connectivity().is_empty());
        assert!(grid.offsets().is_empty());
        assert!(grid.types().is_empty());
    }

    #[test]
    fn builder_methods_collect_fields() {
        let grid = two_cells()
            .with_point_scalars(ScalarData::new("Temperature", vec![200., 300., 250., 230., 400.]))
            .with_cell_vectors(VectorData::new(
                "Vorticity",
                vec![Vector::new(-6.23, 8.87, -6.28), Vector::new(15.79, -14.54, -2.30)],
            ));

        assert_eq!(grid.point_data.scalars.len(), 1);
        assert!(grid.point_data.vectors.is_empty());
        assert_eq!(grid.cell_data.vectors[0].name, "Vorticity");
        assert!(!grid.cell_data.is_empty());
    }

    #[test]
    fn cell_type_ids() {
        assert_eq!(CellType::Vertex.id(), 1);
        assert_eq!(CellType::Hexahedron.id(), 12);
        assert_eq!(CellType::QuadraticHexahedron.id(), 25);
    }

    #[test]
    fn conversions_from_arrays() {
        assert_eq!(Point::from([1., 2., 3.]).to_array(), [1., 2., 3.]);
        assert_eq!(Vector::from([0., -1., 0.5]), Vector::new(0., -1., 0.5));
    }
}
