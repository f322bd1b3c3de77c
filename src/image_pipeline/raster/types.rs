//! Raster image types

use crate::image_pipeline::common::error::{FilterError, Result};

/// Decoded image stored as three planar channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Largest representable sample; below 256 samples are 8-bit on disk
    pub max_value: u16,
    /// Red samples, row-major, index `y * width + x`
    pub red: Vec<u16>,
    /// Green samples, same layout as `red`
    pub green: Vec<u16>,
    /// Blue samples, same layout as `red`
    pub blue: Vec<u16>,
}

impl RasterImage {
    /// Allocates a black image.
    pub fn new(width: usize, height: usize, max_value: u16) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            max_value,
            red: vec![0; len],
            green: vec![0; len],
            blue: vec![0; len],
        }
    }

    /// Builds an image from existing channel data.
    ///
    /// Every channel must hold exactly `width * height` samples.
    pub fn from_channels(
        width: usize,
        height: usize,
        max_value: u16,
        red: Vec<u16>,
        green: Vec<u16>,
        blue: Vec<u16>,
    ) -> Result<Self> {
        let len = width * height;
        if red.len() != len || green.len() != len || blue.len() != len {
            return Err(FilterError::InvalidDimensions(width, height));
        }

        Ok(Self {
            width,
            height,
            max_value,
            red,
            green,
            blue,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Samples are 16-bit on disk when `max_value >= 256`.
    pub fn is_wide(&self) -> bool {
        self.max_value >= 256
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u16; 3] {
        let i = y * self.width + x;
        [self.red[i], self.green[i], self.blue[i]]
    }

    pub fn channels(&self) -> [&[u16]; 3] {
        [&self.red, &self.green, &self.blue]
    }

    pub fn channels_mut(&mut self) -> [&mut Vec<u16>; 3] {
        [&mut self.red, &mut self.green, &mut self.blue]
    }
}
