//! Effect selection types

use std::fmt;
use std::str::FromStr;

use tracing::warn;
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;
use super::{box_blur, grayscale, invert, sepia};

/// Effect names as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Grayscale,
    Blur,
    Inversion,
    Sepia,
}

/// Lower-case name of every effect. New effects are registered here.
pub const EFFECT_REGISTRY: &[(&str, EffectKind)] = &[
    ("grayscale", EffectKind::Grayscale),
    ("blur", EffectKind::Blur),
    ("inversion", EffectKind::Inversion),
    ("sepia", EffectKind::Sepia),
];

impl EffectKind {
    pub fn name(self) -> &'static str {
        EFFECT_REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }

    /// Whether the effect needs `--value`.
    pub fn requires_value(self) -> bool {
        matches!(self, EffectKind::Blur)
    }
}

impl FromStr for EffectKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        EFFECT_REGISTRY
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| FilterError::ConfigError(format!("Effect '{}' not found", lowered)))
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully parameterised effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Grayscale,
    /// Box blur with the given radius in pixels
    Blur { radius: u32 },
    Inversion,
    Sepia,
}

impl Effect {
    /// Combines an effect name with the optional `--value` argument.
    ///
    /// Blur without a radius is a configuration error. A value given to an
    /// effect that takes none is ignored with a warning.
    pub fn from_kind(kind: EffectKind, value: Option<u32>) -> Result<Self> {
        if let (Some(value), false) = (value, kind.requires_value()) {
            warn!(effect = %kind, value, "Ignoring value for effect without parameters");
        }

        Ok(match kind {
            EffectKind::Grayscale => Effect::Grayscale,
            EffectKind::Inversion => Effect::Inversion,
            EffectKind::Sepia => Effect::Sepia,
            EffectKind::Blur => {
                let radius = value.ok_or_else(|| {
                    FilterError::ConfigError(
                        "The 'blur' effect requires a radius (--value)".to_string(),
                    )
                })?;
                Effect::Blur { radius }
            }
        })
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Grayscale => EffectKind::Grayscale,
            Effect::Blur { .. } => EffectKind::Blur,
            Effect::Inversion => EffectKind::Inversion,
            Effect::Sepia => EffectKind::Sepia,
        }
    }

    /// Runs the CPU kernel for this effect.
    pub fn apply(&self, image: &mut RasterImage) {
        match *self {
            Effect::Grayscale => grayscale(image),
            Effect::Blur { radius } => box_blur(image, radius),
            Effect::Inversion => invert(image),
            Effect::Sepia => sepia(image),
        }
    }
}
