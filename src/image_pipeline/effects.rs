//! Effect kernels applied to a decoded raster in place

#[cfg(jetson_cuda)]
pub mod cuda_blur;
pub mod blur;
pub mod grayscale;
pub mod inversion;
pub mod sepia;
pub mod types;

// Stand-in when the CUDA kernels were not built
#[cfg(not(jetson_cuda))]
pub struct CudaBoxBlur;

#[cfg(not(jetson_cuda))]
impl CudaBoxBlur {
    pub fn new() -> Result<Self> {
        Err(FilterError::CudaError(
            "CUDA box blur is not available on this platform".to_string(),
        ))
    }

    #[allow(unused)]
    pub fn process(&self, image: &mut RasterImage, radius: u32) -> Result<()> {
        Err(FilterError::CudaError(
            "CUDA box blur is not available on this platform".to_string(),
        ))
    }
}

#[cfg(jetson_cuda)]
pub use cuda_blur::{CudaBoxBlur, DeviceImage};
pub use blur::box_blur;
pub use grayscale::grayscale;
pub use inversion::invert;
pub use sepia::sepia;
pub use types::{Effect, EffectKind, EFFECT_REGISTRY};

#[cfg(not(jetson_cuda))]
use crate::image_pipeline::{FilterError, RasterImage, Result};
