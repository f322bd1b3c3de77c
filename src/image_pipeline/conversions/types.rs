//! Pipeline configuration types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::effects::Effect;
use crate::image_pipeline::ppm::types::{AsciiLayout, PpmEncoding, WriteOptions};

/// Where the blur kernel runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Host implementation (default)
    #[default]
    Cpu,
    /// CUDA device, available on Jetson builds only
    Cuda,
}

impl FromStr for Backend {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Backend::Cpu),
            "cuda" => Ok(Backend::Cuda),
            other => Err(FilterError::ConfigError(format!("Backend '{}' not found", other))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Cpu => "cpu",
            Backend::Cuda => "cuda",
        })
    }
}

/// Configuration for one decode, effect, encode run
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Effect applied to the decoded image
    pub effect: Effect,
    /// Output variant (P6 by default)
    pub encoding: PpmEncoding,
    /// Line breaking for P3 output
    pub ascii_layout: AsciiLayout,
    /// Where blur runs; other effects always run on the host
    pub backend: Backend,
}

impl FilterConfig {
    /// P6 output, legacy P3 layout, CPU backend. Override fields with
    /// struct update syntax.
    pub fn new(effect: Effect) -> Self {
        Self {
            effect,
            encoding: PpmEncoding::default(),
            ascii_layout: AsciiLayout::default(),
            backend: Backend::default(),
        }
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            encoding: self.encoding,
            ascii_layout: self.ascii_layout,
        }
    }
}
