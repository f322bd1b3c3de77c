use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RasterImage;
use crate::image_pipeline::ppm::types::WriteOptions;

pub trait ImageWriter {
    fn write_image(&self, image: &RasterImage, output: &mut dyn Write, options: &WriteOptions) -> Result<()>;
}
