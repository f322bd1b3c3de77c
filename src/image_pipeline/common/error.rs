use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("The file could not be opened: {0}")]
    InputReadError(String),

    #[error("Failed to write image: {0}")]
    OutputWriteError(String),

    #[error("Incorrect format for PPM image: {0}")]
    UnsupportedFormat(String),

    #[error("File reading error: {0}")]
    DecodeError(String),

    #[error("Incorrect resolution of the PPM image: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("CUDA error: {0}")]
    CudaError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse grouping of [`FilterError`] used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad or missing command-line arguments.
    Config,
    /// File open, read or write failure.
    Io,
    /// Malformed PPM header or body.
    Format,
    /// Failure on the CUDA device path.
    Device,
}

impl FilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::ConfigError(_) => ErrorCategory::Config,
            FilterError::InputReadError(_)
            | FilterError::OutputWriteError(_)
            | FilterError::IoError(_) => ErrorCategory::Io,
            FilterError::UnsupportedFormat(_)
            | FilterError::DecodeError(_)
            | FilterError::InvalidDimensions(_, _) => ErrorCategory::Format,
            FilterError::CudaError(_) => ErrorCategory::Device,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
