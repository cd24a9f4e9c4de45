//! Error types and context management for layout, animation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tilebloom operations
#[derive(Debug)]
pub enum TileBloomError {
    /// Failed to decode an image asset from the filesystem
    AssetLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Asset handle does not refer to a loaded image
    InvalidAssetId {
        /// The offending asset index
        index: usize,
        /// Number of loaded assets
        available: usize,
    },

    /// Failed to encode rendered frames to disk
    Export {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for TileBloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidAssetId { index, available } => {
                write!(
                    f,
                    "Asset index {index} is out of bounds ({available} assets loaded)"
                )
            }
            Self::Export { path, source } => {
                write!(
                    f,
                    "Failed to export frames to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for TileBloomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } | Self::Export { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tilebloom results
pub type Result<T> = std::result::Result<T, TileBloomError>;

/// Attaches a filesystem path to errors raised without one
pub trait WithPath<T> {
    /// Replace the placeholder path of the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<TileBloomError>,
{
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                TileBloomError::AssetLoad { path: p, .. }
                | TileBloomError::Export { path: p, .. }
                | TileBloomError::FileSystem { path: p, .. } => *p = path.into(),
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for TileBloomError {
    fn from(err: image::ImageError) -> Self {
        Self::AssetLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TileBloomError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileBloomError {
    TileBloomError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TileBloomError {
    TileBloomError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/error.rs"]
mod tests;
