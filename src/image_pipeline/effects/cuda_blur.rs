use cudarc::driver::safe::*;
use cudarc::nvrtc::Ptx;
use std::sync::Arc;
use tracing::debug;

use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;

fn cuda_error(e: impl std::fmt::Display) -> FilterError {
    FilterError::CudaError(e.to_string())
}

/// Device copy of the three planar channels.
///
/// Device memory is owned by the `CudaSlice`s and released when the handle
/// is dropped, including on early returns.
pub struct DeviceImage {
    width: usize,
    height: usize,
    channels: [CudaSlice<u16>; 3],
}

impl DeviceImage {
    /// Copies the host channels to the device.
    pub fn upload(stream: &Arc<CudaStream>, image: &RasterImage) -> Result<Self> {
        Ok(Self {
            width: image.width,
            height: image.height,
            channels: [
                stream.clone_htod(&image.red).map_err(cuda_error)?,
                stream.clone_htod(&image.green).map_err(cuda_error)?,
                stream.clone_htod(&image.blue).map_err(cuda_error)?,
            ],
        })
    }

    /// Allocates zeroed device channels of the same size.
    fn zeros_like(stream: &Arc<CudaStream>, other: &DeviceImage) -> Result<Self> {
        let len = other.width * other.height;
        Ok(Self {
            width: other.width,
            height: other.height,
            channels: [
                stream.alloc_zeros::<u16>(len).map_err(cuda_error)?,
                stream.alloc_zeros::<u16>(len).map_err(cuda_error)?,
                stream.alloc_zeros::<u16>(len).map_err(cuda_error)?,
            ],
        })
    }

    /// Copies all three channels back and only then overwrites the host image.
    pub fn download(&self, stream: &Arc<CudaStream>, image: &mut RasterImage) -> Result<()> {
        let red = stream.clone_dtoh(&self.channels[0]).map_err(cuda_error)?;
        let green = stream.clone_dtoh(&self.channels[1]).map_err(cuda_error)?;
        let blue = stream.clone_dtoh(&self.channels[2]).map_err(cuda_error)?;

        image.red = red;
        image.green = green;
        image.blue = blue;
        Ok(())
    }
}

/// CUDA box blur, numerically identical to the CPU kernel
pub struct CudaBoxBlur {
    stream: Arc<CudaStream>,
    kernel: CudaFunction,
}

impl CudaBoxBlur {
    /// Initialize CUDA context and load kernel
    pub fn new() -> Result<Self> {
        // Include compiled PTX from build.rs
        let ptx = include_str!(concat!(env!("OUT_DIR"), "/box_blur.ptx"));
        let kernel_name = "box_blur_u16";

        let ctx = CudaContext::new(0).map_err(cuda_error)?;
        let stream = ctx.default_stream();
        let module = ctx.load_module(Ptx::from_src(ptx)).map_err(cuda_error)?;
        let kernel = module.load_function(kernel_name).map_err(cuda_error)?;

        Ok(Self { stream, kernel })
    }

    /// Blurs `image` on the device and writes the result back in place.
    pub fn process(&self, image: &mut RasterImage, radius: u32) -> Result<()> {
        if radius == 0 {
            return Ok(());
        }
        debug!("CUDA box blur {}x{} with radius {}", image.width, image.height, radius);

        let source = DeviceImage::upload(&self.stream, image)?;
        let mut blurred = DeviceImage::zeros_like(&self.stream, &source)?;
        self.blur(&source, &mut blurred, radius, image.max_value)?;
        blurred.download(&self.stream, image)
    }

    fn blur(&self, src: &DeviceImage, dst: &mut DeviceImage, radius: u32, max_value: u16) -> Result<()> {
        let width = src.width as i32;
        let height = src.height as i32;
        // Larger radii cover the whole image anyway.
        let radius = radius.min(width.max(height) as u32) as i32;
        let max_value = max_value as u32;

        let threads = (32, 32, 1);
        let blocks = (
            ((src.width + 32 - 1) / 32),
            ((src.height + 32 - 1) / 32),
            1,
        );
        let cfg = LaunchConfig {
            grid_dim: (blocks.0 as u32, blocks.1 as u32, blocks.2 as u32),
            block_dim: threads,
            shared_mem_bytes: 0,
        };

        for (src_channel, dst_channel) in src.channels.iter().zip(dst.channels.iter_mut()) {
            let mut launch_args = self.stream.launch_builder(&self.kernel);
            launch_args.arg(src_channel);
            launch_args.arg(dst_channel);
            launch_args.arg(&width);
            launch_args.arg(&height);
            launch_args.arg(&radius);
            launch_args.arg(&max_value);

            unsafe { launch_args.launch(cfg) }.map_err(cuda_error)?;
        }

        Ok(())
    }
}
