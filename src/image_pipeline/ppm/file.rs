//! Path-based entry points for the PPM codec.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;
use crate::image_pipeline::ppm::{ImageReader, ImageWriter, PpmReader, PpmWriter};
use crate::image_pipeline::ppm::types::{PpmEncoding, WriteOptions};

/// Reads and decodes the PPM file at `path`.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    PpmReader.read_image(&read_file(path.as_ref())?)
}

/// Encodes `image` to `path` as P6 when `binary` is set, otherwise as P3
/// with the default ASCII layout.
pub fn encode<P: AsRef<Path>>(path: P, image: &RasterImage, binary: bool) -> Result<String> {
    let options = WriteOptions {
        encoding: if binary { PpmEncoding::Binary } else { PpmEncoding::Ascii },
        ..WriteOptions::default()
    };
    let mut encoded = Vec::new();
    PpmWriter.write_image(image, &mut encoded, &options)?;
    write_file(path.as_ref(), &encoded)
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        FilterError::InputReadError(format!("{}: {}", path.display(), e))
    })
}

/// Writes an encoded image and returns the confirmation message.
pub(crate) fn write_file(path: &Path, encoded: &[u8]) -> Result<String> {
    let write_error = |e: std::io::Error| {
        FilterError::OutputWriteError(format!("{}: {}", path.display(), e))
    };

    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(encoded).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    info!(output = %path.display(), bytes = encoded.len(), "Image saved");
    Ok(format!("Saving image is successful: {}", path.display()))
}
