//! # Mesh Errors
//!
//! Error types for mesh generation, boolean and export operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the geometry kernel.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (zero or negative dimensions, too few segments)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Boolean operation failed
    #[error("Boolean operation '{operation}' failed: {message}")]
    BooleanFailed {
        operation: &'static str,
        message: String,
    },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Writing a model file failed
    #[error("Export to {path} failed: {message}")]
    ExportFailed { path: PathBuf, message: String },

    /// I/O error from the standard library
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            operation,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// Creates an export error for `path`.
    pub fn export_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ExportFailed {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::boolean_failed("difference", "empty result");
        assert!(err.to_string().contains("difference"));
        assert!(err.to_string().contains("empty result"));

        let err = MeshError::export_failed("out/part.stl", "empty mesh");
        assert!(err.to_string().contains("part.stl"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
