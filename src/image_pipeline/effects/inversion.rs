use crate::image_pipeline::raster::types::RasterImage;

/// Replaces every sample `s` with `max_value - s`.
///
/// Samples above `max_value` (possible in malformed input) become 0.
pub fn invert(image: &mut RasterImage) {
    let max_value = image.max_value;
    for channel in image.channels_mut() {
        for sample in channel.iter_mut() {
            *sample = max_value.saturating_sub(*sample);
        }
    }
}
