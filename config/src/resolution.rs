//! Tessellation resolution shared by every curved primitive.
//!
//! Wraps the `$fn/$fa/$fs` triple so callers pass one validated value
//! around instead of three loose floats.

use thiserror::Error;

use crate::constants::{compute_fragments, DEFAULT_FA, DEFAULT_FS, MIN_FRAGMENTS};

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when $fa is zero, negative or not finite.
    #[error("fragment angle must be positive: {0}")]
    InvalidFragmentAngle(f64),
    /// Raised when $fs is zero, negative or not finite.
    #[error("fragment size must be positive: {0}")]
    InvalidFragmentSize(f64),
    /// Raised when a fixed fragment count is too small to form a polygon.
    #[error("fragment count must be >= {min}: {value}")]
    InvalidFragmentCount {
        /// Requested count
        value: u32,
        /// Smallest accepted count
        min: u32,
    },
}

/// Tessellation resolution for circular shapes.
///
/// # Examples
/// ```
/// use config::Resolution;
///
/// let fixed = Resolution::with_fn(32).expect("valid resolution");
/// assert_eq!(fixed.segments_for(0.75), 32);
///
/// assert!(Resolution::new(None, 0.0, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// $fn: fixed fragment count (None = derive from $fa/$fs)
    pub fn_: Option<u32>,
    /// $fa: minimum angle per fragment in degrees
    pub fa: f64,
    /// $fs: minimum fragment edge length
    pub fs: f64,
}

impl Resolution {
    /// Builds a resolution, rejecting values that cannot tessellate a circle.
    pub fn new(fn_: Option<u32>, fa: f64, fs: f64) -> Result<Self, ConfigError> {
        if !(fa.is_finite() && fa > 0.0) {
            return Err(ConfigError::InvalidFragmentAngle(fa));
        }
        if !(fs.is_finite() && fs > 0.0) {
            return Err(ConfigError::InvalidFragmentSize(fs));
        }
        if let Some(count) = fn_ {
            if count < MIN_FRAGMENTS {
                return Err(ConfigError::InvalidFragmentCount {
                    value: count,
                    min: MIN_FRAGMENTS,
                });
            }
        }
        Ok(Self { fn_, fa, fs })
    }

    /// Fixed fragment count with default $fa/$fs.
    pub fn with_fn(fragments: u32) -> Result<Self, ConfigError> {
        Self::new(Some(fragments), DEFAULT_FA, DEFAULT_FS)
    }

    /// Number of segments used to tessellate a circle of `radius`.
    pub fn segments_for(&self, radius: f64) -> u32 {
        let fn_value = self.fn_.map_or(0.0, f64::from);
        compute_fragments(radius, fn_value, self.fa, self.fs)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            fn_: None,
            fa: DEFAULT_FA,
            fs: DEFAULT_FS,
        }
    }
}
