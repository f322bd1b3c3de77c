//! Raster buffer module
//!
//! The in-memory image exchanged between the PPM codec and the effect kernels.

pub mod types;

pub use types::RasterImage;
