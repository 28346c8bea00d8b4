//! Custom error types for raster preprocessing

use std::fmt;
use std::io;

/// Raster-specific error types
#[derive(Debug)]
pub enum RasterError {
    /// I/O error
    IoError(io::Error),
    /// Raster file could not be opened or decoded
    LoadError { path: String, reason: String },
    /// Requested band does not exist in the raster
    MissingBand { path: String, band: u32 },
    /// Sample format the pipeline cannot represent
    UnsupportedSampleType(String),
    /// Invalid argument passed to an operation
    InvalidParameter(String),
    /// A transform failed to apply
    TransformError(String),
    /// Buffer could not be encoded or written
    SaveError { path: String, reason: String },
    /// Preview could not be rendered or handed to a viewer
    DisplayError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::IoError(e) => write!(f, "I/O error: {}", e),
            RasterError::LoadError { path, reason } =>
                write!(f, "Failed to load raster '{}': {}", path, reason),
            RasterError::MissingBand { path, band } =>
                write!(f, "Band {} not present in '{}'", band, path),
            RasterError::UnsupportedSampleType(desc) =>
                write!(f, "Unsupported sample type: {}", desc),
            RasterError::InvalidParameter(msg) =>
                write!(f, "Invalid parameter: {}", msg),
            RasterError::TransformError(msg) =>
                write!(f, "Transform failed: {}", msg),
            RasterError::SaveError { path, reason } =>
                write!(f, "Failed to save '{}': {}", path, reason),
            RasterError::DisplayError(msg) =>
                write!(f, "Display failed: {}", msg),
            RasterError::GenericError(msg) =>
                write!(f, "Raster error: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

impl From<io::Error> for RasterError {
    fn from(error: io::Error) -> Self {
        RasterError::IoError(error)
    }
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;

impl From<String> for RasterError {
    fn from(msg: String) -> Self {
        RasterError::GenericError(msg)
    }
}
