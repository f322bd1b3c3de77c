//! PPM image reader.
//!
//! Decodes both PPM variants from an in-memory byte slice. The header grammar
//! is `magic, [comments], width, height, [comments], max value`, with tokens
//! separated by ASCII whitespace and comments running from `#` to the end of
//! the line.

use std::str::FromStr;

use tracing::debug;
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;
use crate::image_pipeline::ppm::reader::ImageReader;
use crate::image_pipeline::ppm::types::{PpmFormat, MAX_DIMENSION};

/// Reader for P3 and P6 files.
pub struct PpmReader;

impl ImageReader for PpmReader {
    /// Decodes a PPM file held in memory.
    ///
    /// This method:
    /// 1. Checks the magic token (`P3` or `P6`)
    /// 2. Parses width, height and max value, skipping comments after the
    ///    magic token and before the max value
    /// 3. Rejects resolutions outside `1..10000` and a max value of 0
    /// 4. Decodes the body into three planar channels
    ///
    /// Samples above the max value are kept as-is; kernels clamp their output.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the PPM file
    ///
    /// # Returns
    ///
    /// * `Ok(RasterImage)` - Fully populated image
    /// * `Err(FilterError)` - Wrong magic token, malformed header, bad
    ///   resolution or truncated body
    ///
    /// # Examples
    ///
    /// ```
    /// use ppm_effects_rs::image_pipeline::{ImageReader, PpmReader};
    ///
    /// let image = PpmReader.read_image(b"P3\n1 1\n255\n10 20 30\n").unwrap();
    /// assert_eq!(image.pixel(0, 0), [10, 20, 30]);
    /// ```
    fn read_image(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding PPM image, {} bytes", data.len());

        let mut scanner = Scanner::new(data);

        let format = PpmFormat::from_magic(scanner.token())?;

        scanner.skip_comments();
        let width: usize = scanner.number("width")?;
        let height: usize = scanner.number("height")?;

        scanner.skip_comments();
        let max_value: u16 = scanner.number("max value")?;

        if width == 0 || height == 0 || width >= MAX_DIMENSION || height >= MAX_DIMENSION {
            return Err(FilterError::InvalidDimensions(width, height));
        }
        if max_value == 0 {
            return Err(FilterError::UnsupportedFormat(
                "max value must be at least 1".to_string(),
            ));
        }

        debug!("PPM header: {:?} {}x{}, max value {}", format, width, height, max_value);

        let mut image = RasterImage::new(width, height, max_value);
        match format {
            PpmFormat::Ascii => read_ascii_body(&mut scanner, &mut image)?,
            PpmFormat::Binary => read_binary_body(&mut scanner, &mut image)?,
        }

        Ok(image)
    }
}

fn read_ascii_body(scanner: &mut Scanner<'_>, image: &mut RasterImage) -> Result<()> {
    for i in 0..image.pixel_count() {
        image.red[i] = scanner.number("red sample")?;
        image.green[i] = scanner.number("green sample")?;
        image.blue[i] = scanner.number("blue sample")?;
    }
    Ok(())
}

fn read_binary_body(scanner: &mut Scanner<'_>, image: &mut RasterImage) -> Result<()> {
    // Exactly one separator byte follows the max value.
    scanner.take(1).ok_or_else(|| {
        FilterError::DecodeError("missing separator before pixel data".to_string())
    })?;

    let bytes_per_sample = if image.is_wide() { 2 } else { 1 };
    let expected = image.pixel_count() * 3 * bytes_per_sample;
    let available = scanner.remaining();
    let body = scanner.take(expected).ok_or_else(|| {
        FilterError::DecodeError(format!(
            "expected {} bytes of pixel data, found {}",
            expected, available
        ))
    })?;

    if bytes_per_sample == 1 {
        for (i, pixel) in body.chunks_exact(3).enumerate() {
            image.red[i] = pixel[0] as u16;
            image.green[i] = pixel[1] as u16;
            image.blue[i] = pixel[2] as u16;
        }
    } else {
        for (i, pixel) in body.chunks_exact(6).enumerate() {
            image.red[i] = u16::from_be_bytes([pixel[0], pixel[1]]);
            image.green[i] = u16::from_be_bytes([pixel[2], pixel[3]]);
            image.blue[i] = u16::from_be_bytes([pixel[4], pixel[5]]);
        }
    }

    Ok(())
}

/// Cursor over the raw file bytes.
struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_comments(&mut self) {
        self.skip_whitespace();
        while self.peek() == Some(b'#') {
            match self.data[self.pos..].iter().position(|&b| b == b'\n') {
                Some(offset) => self.pos += offset + 1,
                None => self.pos = self.data.len(),
            }
            self.skip_whitespace();
        }
    }

    /// Next whitespace-delimited token; empty at end of input.
    fn token(&mut self) -> &'a [u8] {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().is_some_and(|b| !b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }

    /// Parses a run of decimal digits after optional whitespace.
    fn number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        if start == self.pos {
            return Err(FilterError::DecodeError(match self.peek() {
                Some(b) => format!("expected {} at byte {}, found {:?}", what, start, b as char),
                None => format!("unexpected end of file while reading {}", what),
            }));
        }

        // Digits are ASCII, so this slice is valid UTF-8.
        let digits = std::str::from_utf8(&self.data[start..self.pos]).unwrap_or_default();
        digits.parse().map_err(|_| {
            FilterError::DecodeError(format!("{} out of range: {}", what, digits))
        })
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }
}
