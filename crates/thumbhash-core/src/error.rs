use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the thumbhash library
#[derive(Error, Debug)]
pub enum Error {
    /// Image is empty or larger than the encoder accepts
    #[error("Image dimensions {width}x{height} must be between 1 and 100 on each side")]
    Dimension { width: u32, height: u32 },

    /// Declared dimensions disagree with the supplied pixel buffer
    #[error(
        "Pixel buffer for a {width}x{height} image must hold {expected} bytes, got {actual}"
    )]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// File not found error
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Unsupported image format
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// True for both flavours of dimension failure (out of range, or buffer size mismatch)
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Error::Dimension { .. } | Error::DimensionMismatch { .. })
    }
}
