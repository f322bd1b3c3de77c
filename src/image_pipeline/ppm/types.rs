//! PPM format types

use crate::image_pipeline::common::error::{FilterError, Result};

/// Width and height must both stay below this bound.
pub const MAX_DIMENSION: usize = 10000;

/// The two supported magic tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmFormat {
    /// `P3`, whitespace-separated decimal samples
    Ascii,
    /// `P6`, raw 8-bit or 16-bit big-endian samples
    Binary,
}

impl PpmFormat {
    pub fn from_magic(token: &[u8]) -> Result<Self> {
        match token {
            b"P3" => Ok(PpmFormat::Ascii),
            b"P6" => Ok(PpmFormat::Binary),
            other => Err(FilterError::UnsupportedFormat(format!(
                "unexpected magic token {:?}",
                String::from_utf8_lossy(other)
            ))),
        }
    }

    pub fn magic(self) -> &'static str {
        match self {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        }
    }
}

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PpmEncoding {
    /// P6 (default)
    #[default]
    Binary,
    /// P3
    Ascii,
}

impl PpmEncoding {
    pub fn format(self) -> PpmFormat {
        match self {
            PpmEncoding::Binary => PpmFormat::Binary,
            PpmEncoding::Ascii => PpmFormat::Ascii,
        }
    }
}

/// Line breaking used by the P3 writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsciiLayout {
    /// Break after every pixel whose index is a multiple of the width, so
    /// each break follows the first pixel of a row. Kept for compatibility
    /// with files produced by earlier versions of the tool.
    #[default]
    Legacy,
    /// One image row per line.
    RowPerLine,
}

/// Options passed to an [`ImageWriter`](super::ImageWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    pub encoding: PpmEncoding,
    pub ascii_layout: AsciiLayout,
}

impl WriteOptions {
    pub fn binary() -> Self {
        Self {
            encoding: PpmEncoding::Binary,
            ascii_layout: AsciiLayout::default(),
        }
    }

    pub fn ascii(layout: AsciiLayout) -> Self {
        Self {
            encoding: PpmEncoding::Ascii,
            ascii_layout: layout,
        }
    }
}
