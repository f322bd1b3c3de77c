use tracing::debug;
use crate::image_pipeline::raster::types::RasterImage;

/// Box blur with a square `(2 * radius + 1)` window clipped to the image.
///
/// Each output sample is the mean of the in-bounds window, rounded half up,
/// computed from a snapshot of the input. Window sums come from separable
/// prefix sums, so the cost per channel does not depend on `radius`.
///
/// A radius of 0 leaves the image untouched.
pub fn box_blur(image: &mut RasterImage, radius: u32) {
    if radius == 0 {
        return;
    }

    let width = image.width;
    let height = image.height;
    let max_value = image.max_value;
    let radius = radius as usize;
    debug!("Box blur {}x{} with radius {}", width, height, radius);

    // Scratch buffers shared by the three channels.
    let mut row_sums = vec![0u64; width * height];
    let mut prefix = vec![0u64; width.max(height) + 1];

    for channel in image.channels_mut() {
        horizontal_sums(channel, &mut row_sums, &mut prefix, width, height, radius);
        vertical_means(&row_sums, channel, &mut prefix, width, height, radius, max_value);
    }
}

/// Inclusive bounds of the window around `center` on an axis of length `len`.
fn window(center: usize, radius: usize, len: usize) -> (usize, usize) {
    (center.saturating_sub(radius), (center + radius).min(len - 1))
}

fn horizontal_sums(
    src: &[u16],
    dst: &mut [u64],
    prefix: &mut [u64],
    width: usize,
    height: usize,
    radius: usize,
) {
    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        for (x, &sample) in row.iter().enumerate() {
            prefix[x + 1] = prefix[x] + sample as u64;
        }
        for x in 0..width {
            let (x0, x1) = window(x, radius, width);
            dst[y * width + x] = prefix[x1 + 1] - prefix[x0];
        }
    }
}

fn vertical_means(
    row_sums: &[u64],
    dst: &mut [u16],
    prefix: &mut [u64],
    width: usize,
    height: usize,
    radius: usize,
    max_value: u16,
) {
    for x in 0..width {
        let (x0, x1) = window(x, radius, width);
        let columns = (x1 - x0 + 1) as u64;

        for y in 0..height {
            prefix[y + 1] = prefix[y] + row_sums[y * width + x];
        }
        for y in 0..height {
            let (y0, y1) = window(y, radius, height);
            let count = columns * (y1 - y0 + 1) as u64;
            let sum = prefix[y1 + 1] - prefix[y0];
            let mean = (sum + count / 2) / count;
            dst[y * width + x] = mean.min(max_value as u64) as u16;
        }
    }
}
