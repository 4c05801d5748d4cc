//! Error types for fire-proximity

use std::io;
use thiserror::Error;

/// Result type for fire-proximity operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading perimeters or reprojecting them
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV ring file could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ring file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is not in a supported layout
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// PROJ failed to build a transform or convert a coordinate
    #[error("Projection error: {0}")]
    Projection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFormat("test".to_string());
        assert_eq!(err.to_string(), "Invalid format: test");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_projection_error() {
        let err = Error::Projection("bad crs".to_string());
        assert_eq!(err.to_string(), "Projection error: bad crs");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
