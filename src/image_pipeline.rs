//! PPM effect pipeline
//!
//! This module splits the tool into a PPM codec, a raster buffer shared between
//! codec and kernels, the effect kernels themselves, and the orchestration that
//! ties decode, effect and encode together.

pub mod common;
pub mod raster;
pub mod ppm;
pub mod effects;
pub mod conversions;
pub mod timing;

pub use common::{
    ErrorCategory,
    FilterError,
    Result,
};

pub use raster::RasterImage;

pub use ppm::{
    AsciiLayout,
    ImageReader,
    ImageWriter,
    PpmEncoding,
    PpmReader,
    PpmWriter,
    WriteOptions,
};

pub use effects::{
    Effect,
    EffectKind,
    CudaBoxBlur,
};

pub use conversions::{
    Backend,
    FilterConfig,
    FilterPipeline,
};

pub use timing::{PipelineTimings, StepTiming, Timer};
