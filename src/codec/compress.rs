use crate::Error;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// Deflate `payload` into a single zlib stream at the highest compression level.
///
/// VTK's `vtkZLibDataCompressor` splits data into blocks, but a single block covering the
/// whole payload is always valid and that is all we ever produce. The encoder lives only for
/// the duration of this call.
pub fn compress_block(payload: &[u8]) -> Result<Vec<u8>, Error> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(payload.len() / 2 + 16),
        Compression::best(),
    );

    encoder.write_all(payload).map_err(Error::Compression)?;
    let compressed = encoder.finish().map_err(Error::Compression)?;

    log::trace!(
        "compressed block of {} bytes into {} bytes",
        payload.len(),
        compressed.len()
    );

    Ok(compressed)
}
