//! # Error Types
//!
//! Application-level errors. Kernel and configuration errors are wrapped
//! unchanged so their messages reach the log intact.

use config::ConfigError;
use jig_mesh::MeshError;
use thiserror::Error;

/// Errors raised while building or exporting jig parts.
#[derive(Debug, Error)]
pub enum JigError {
    /// Geometry kernel failure (degenerate primitive, boolean, export).
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Invalid tessellation settings.
    #[error("invalid resolution: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem failure outside the kernel writers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Part catalog file is not valid JSON for a catalog.
    #[error("invalid catalog file: {0}")]
    Json(#[from] serde_json::Error),

    /// Part catalog is well-formed JSON but not a usable catalog.
    #[error("catalog error: {message}")]
    Catalog { message: String },

    /// A built part is not an exportable closed solid.
    #[error("{name} is not an exportable solid: {reason}")]
    UnexpectedGeometry { name: String, reason: String },
}

impl JigError {
    /// Creates a catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Creates an unexpected geometry error.
    pub fn unexpected_geometry(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnexpectedGeometry {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
