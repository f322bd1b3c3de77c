use crate::image_pipeline::raster::types::RasterImage;

/// Define the RGB weights for the luma computation.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Converts every pixel to gray using
///
/// Y = round(0.299 * R + 0.587 * G + 0.114 * B)
///
/// clamped to `[0, max_value]` and written to all three channels.
pub fn grayscale(image: &mut RasterImage) {
    let max_value = image.max_value as f64;
    for i in 0..image.pixel_count() {
        let r = image.red[i] as f64;
        let g = image.green[i] as f64;
        let b = image.blue[i] as f64;

        let y = (RW * r + GW * g + BW * b).round().clamp(0.0, max_value) as u16;

        image.red[i] = y;
        image.green[i] = y;
        image.blue[i] = y;
    }
}
