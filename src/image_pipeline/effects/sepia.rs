use crate::image_pipeline::raster::types::RasterImage;

/// Rows produce R', G' and B' from (R, G, B).
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Applies the sepia tone matrix, rounding and clamping each output to
/// `[0, max_value]`.
pub fn sepia(image: &mut RasterImage) {
    let max_value = image.max_value as f64;
    for i in 0..image.pixel_count() {
        let rgb = [image.red[i] as f64, image.green[i] as f64, image.blue[i] as f64];

        let [r, g, b] = SEPIA.map(|row| {
            let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
            v.round().clamp(0.0, max_value) as u16
        });

        image.red[i] = r;
        image.green[i] = g;
        image.blue[i] = b;
    }
}
