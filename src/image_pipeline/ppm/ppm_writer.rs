use std::io::{self, Write};
use tracing::debug;
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;
use crate::image_pipeline::ppm::types::{AsciiLayout, PpmEncoding, WriteOptions};
use crate::image_pipeline::ppm::writer::ImageWriter;

pub struct PpmWriter;

fn write_error(e: io::Error) -> FilterError {
    FilterError::OutputWriteError(e.to_string())
}

impl ImageWriter for PpmWriter {
    fn write_image(&self, image: &RasterImage, output: &mut dyn Write, options: &WriteOptions) -> Result<()> {
        debug!(
            "Encoding PPM image: {}x{} as {:?}",
            image.width, image.height, options.encoding
        );

        write!(
            output,
            "{}\n{} {}\n{}\n",
            options.encoding.format().magic(),
            image.width,
            image.height,
            image.max_value
        )
        .map_err(write_error)?;

        match options.encoding {
            PpmEncoding::Binary => output.write_all(&binary_body(image)).map_err(write_error)?,
            PpmEncoding::Ascii => write_ascii_body(image, output, options.ascii_layout)?,
        }

        debug!("PPM encoding complete");
        Ok(())
    }
}

fn binary_body(image: &RasterImage) -> Vec<u8> {
    let [red, green, blue] = image.channels();
    let pixels = red.iter().zip(green).zip(blue);

    if image.is_wide() {
        let mut buffer = Vec::with_capacity(image.pixel_count() * 6);
        for ((&r, &g), &b) in pixels {
            buffer.extend_from_slice(&r.to_be_bytes());
            buffer.extend_from_slice(&g.to_be_bytes());
            buffer.extend_from_slice(&b.to_be_bytes());
        }
        buffer
    } else {
        let narrow = |s: u16| s.min(u8::MAX as u16) as u8;
        let mut buffer = Vec::with_capacity(image.pixel_count() * 3);
        for ((&r, &g), &b) in pixels {
            buffer.extend_from_slice(&[narrow(r), narrow(g), narrow(b)]);
        }
        buffer
    }
}

fn write_ascii_body(image: &RasterImage, output: &mut dyn Write, layout: AsciiLayout) -> Result<()> {
    match layout {
        AsciiLayout::Legacy => {
            for i in 0..image.pixel_count() {
                write!(output, "{} {} {} ", image.red[i], image.green[i], image.blue[i])
                    .map_err(write_error)?;
                if i % image.width == 0 {
                    output.write_all(b"\n").map_err(write_error)?;
                }
            }
        }
        AsciiLayout::RowPerLine => {
            for y in 0..image.height {
                for x in 0..image.width {
                    let [r, g, b] = image.pixel(x, y);
                    let separator = if x + 1 == image.width { "\n" } else { " " };
                    write!(output, "{} {} {}{}", r, g, b, separator).map_err(write_error)?;
                }
            }
        }
    }
    Ok(())
}
