//! Error types for raster loading and coordinate handling.

use raster_common::AffineError;
use thiserror::Error;

/// Errors that can occur while opening or mutating a raster dataset.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Failed to open the raster source.
    #[error("failed to open raster: {0}")]
    OpenFailed(String),

    /// Failed to decode pixel data.
    #[error("failed to read raster data: {0}")]
    ReadFailed(String),

    /// Missing or inconsistent georeferencing metadata.
    #[error("invalid raster metadata: {0}")]
    InvalidMetadata(String),

    /// Pixel type the reader cannot widen to f64.
    #[error("unsupported data type: {0}")]
    UnsupportedDataType(String),

    /// Band buffer length does not match the grid size.
    #[error("band {band} has {len} values, expected {width}x{height}")]
    InvalidDimensions {
        band: usize,
        width: usize,
        height: usize,
        len: usize,
    },

    /// Coordinate values cannot be laid out on the requested dimensions.
    #[error("cannot assign coordinate '{name}' with {len} values to shape {shape:?}")]
    CoordinateShape {
        name: String,
        shape: Vec<usize>,
        len: usize,
    },
}

impl RasterError {
    /// Create an OpenFailed error.
    pub fn open_failed(msg: impl Into<String>) -> Self {
        Self::OpenFailed(msg.into())
    }

    /// Create a ReadFailed error.
    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }

    /// Create an InvalidMetadata error.
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }
}

impl From<AffineError> for RasterError {
    fn from(err: AffineError) -> Self {
        Self::InvalidMetadata(err.to_string())
    }
}

impl From<tiff::TiffError> for RasterError {
    fn from(err: tiff::TiffError) -> Self {
        Self::ReadFailed(err.to_string())
    }
}

/// Result type for raster operations.
pub type RasterResult<T> = std::result::Result<T, RasterError>;
