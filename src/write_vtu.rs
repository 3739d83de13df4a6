use crate::codec;
use crate::prelude::*;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const VTK_VERSION: &str = "0.1";
const ZLIB_COMPRESSOR: &str = "vtkZLibDataCompressor";

/// Write an unstructured grid as a `.vtu` document to a `Writer`
///
/// ```
/// use vtu::{Cell, CellType, Point, UnstructuredGrid, WriterOptions};
///
/// let grid = UnstructuredGrid::new(
///     vec![Point::new(0., 0., 0.), Point::new(1., 0., 0.), Point::new(0., 1., 0.)],
///     vec![Cell::new(vec![0, 1, 2], CellType::Triangle)],
/// );
///
/// let mut output = Vec::new();
/// vtu::write_vtu(&mut output, &grid, &WriterOptions::ascii()).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains(r#"<Piece NumberOfPoints="3" NumberOfCells="1">"#));
/// ```
pub fn write_vtu<W: Write>(
    writer: W,
    grid: &UnstructuredGrid,
    options: &WriterOptions,
) -> Result<(), Error> {
    log::info!(
        "writing unstructured grid with {} points and {} cells ({} {}, compressed: {})",
        grid.num_points(),
        grid.num_cells(),
        options.format,
        options.byte_order,
        options.is_compressed_binary(),
    );

    let mut writer = Writer::new_with_indent(writer, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut vtk_file = BytesStart::new("VTKFile");
    vtk_file.push_attribute(("type", "UnstructuredGrid"));
    vtk_file.push_attribute(("version", VTK_VERSION));
    vtk_file.push_attribute(("byte_order", options.byte_order.as_str()));
    // ascii arrays are never compressed
    if options.is_compressed_binary() {
        vtk_file.push_attribute(("compressor", ZLIB_COMPRESSOR));
    }
    writer.write_event(Event::Start(vtk_file))?;

    writer.write_event(Event::Start(BytesStart::new("UnstructuredGrid")))?;

    let num_points = grid.num_points().to_string();
    let num_cells = grid.num_cells().to_string();
    let mut piece = BytesStart::new("Piece");
    piece.push_attribute(("NumberOfPoints", num_points.as_str()));
    piece.push_attribute(("NumberOfCells", num_cells.as_str()));
    writer.write_event(Event::Start(piece))?;

    write_field_data(&mut writer, "PointData", &grid.point_data, options)?;
    write_field_data(&mut writer, "CellData", &grid.cell_data, options)?;

    // point coordinates
    writer.write_event(Event::Start(BytesStart::new("Points")))?;
    write_inline_dataarray(&mut writer, grid.points.as_slice(), None, options)?;
    writer.write_event(Event::End(BytesEnd::new("Points")))?;

    // cell topology
    writer.write_event(Event::Start(BytesStart::new("Cells")))?;
    write_inline_dataarray(
        &mut writer,
        grid.connectivity().as_slice(),
        Some("connectivity"),
        options,
    )?;
    write_inline_dataarray(&mut writer, grid.offsets().as_slice(), Some("offsets"), options)?;
    write_inline_dataarray(&mut writer, grid.types().as_slice(), Some("types"), options)?;
    writer.write_event(Event::End(BytesEnd::new("Cells")))?;

    writer.write_event(Event::End(BytesEnd::new("Piece")))?;
    writer.write_event(Event::End(BytesEnd::new("UnstructuredGrid")))?;
    writer.write_event(Event::End(BytesEnd::new("VTKFile")))?;

    writer.into_inner().flush()?;

    Ok(())
}

/// Create (or truncate) the file at `path` and write the grid to it
pub fn write_vtu_file<P: AsRef<Path>>(
    path: P,
    grid: &UnstructuredGrid,
    options: &WriterOptions,
) -> Result<(), Error> {
    let path = path.as_ref();
    log::debug!("creating vtu file at {}", path.display());

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    write_vtu(writer, grid, options)
}

/// Render the full `.vtu` document into a `String`
pub fn to_vtu_string(grid: &UnstructuredGrid, options: &WriterOptions) -> Result<String, Error> {
    let mut output = Vec::new();
    write_vtu(&mut output, grid, options)?;
    Ok(String::from_utf8(output)?)
}

fn write_field_data<W: Write>(
    writer: &mut Writer<W>,
    element_name: &str,
    fields: &FieldData,
    options: &WriterOptions,
) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new(element_name)))?;

    for scalars in &fields.scalars {
        write_inline_dataarray(
            writer,
            scalars.values.as_slice(),
            Some(scalars.name.as_str()),
            options,
        )?;
    }

    for vectors in &fields.vectors {
        write_inline_dataarray(
            writer,
            vectors.vectors.as_slice(),
            Some(vectors.name.as_str()),
            options,
        )?;
    }

    writer.write_event(Event::End(BytesEnd::new(element_name)))?;

    Ok(())
}

/// write a single (inline) array of data (such as a temperature field) to the vtu file.
///
/// The array is encoded according to `options` and placed as the text content of a
/// `DataArray` element. `name` is left off for arrays that VTK identifies by position
/// (the point coordinates).
pub fn write_inline_dataarray<W: Write, A: Array + ?Sized>(
    writer: &mut Writer<W>,
    array: &A,
    name: Option<&str>,
    options: &WriterOptions,
) -> Result<(), Error> {
    let encoded = codec::encode(array, options)?;

    log::debug!(
        "encoded {} array `{}`: {} tuples, {} bytes raw, {} characters as {}",
        encoded.kind,
        name.unwrap_or("Points"),
        array.length(),
        array.byte_len(),
        encoded.text.len(),
        encoded.format,
    );

    write_inline_array_header(writer, &encoded, name)?;

    writer.write_event(Event::Text(BytesText::new(&encoded.text)))?;

    close_inline_array_header(writer)?;

    Ok(())
}

fn write_inline_array_header<W: Write>(
    writer: &mut Writer<W>,
    encoded: &codec::EncodedArray,
    name: Option<&str>,
) -> Result<(), Error> {
    let mut element = BytesStart::new("DataArray");
    element.push_attribute(("type", encoded.precision().as_str()));

    if let Some(name) = name {
        element.push_attribute(("Name", name));
    }

    element.push_attribute(("format", encoded.format.as_str()));

    if encoded.components() > 1 {
        let components = encoded.components().to_string();
        element.push_attribute(("NumberOfComponents", components.as_str()));
    }

    writer.write_event(Event::Start(element))?;

    Ok(())
}

fn close_inline_array_header<W: Write>(writer: &mut Writer<W>) -> Result<(), Error> {
    writer.write_event(Event::End(BytesEnd::new("DataArray")))?;

    Ok(())
}
