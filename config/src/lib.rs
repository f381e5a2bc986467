//! # Config Crate
//!
//! Centralized configuration for the clip jig pipeline. All tolerances,
//! tessellation defaults, jig default dimensions and output naming live here
//! so the kernel and the application crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_PIN_PITCH, EPSILON};
//! use config::Resolution;
//!
//! assert!(DEFAULT_PIN_PITCH > EPSILON);
//!
//! // Tessellation for a 0.75 mm hole radius
//! let segments = Resolution::default().segments_for(0.75);
//! assert!(segments >= 5);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Settings**: Runtime-tunable values go through constructors
//!   that reject nonsense (`Resolution::new`)

pub mod constants;
pub mod resolution;

pub use resolution::{ConfigError, Resolution};

#[cfg(test)]
mod tests;
