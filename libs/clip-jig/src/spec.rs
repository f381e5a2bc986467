//! # Jig Parameters
//!
//! [`ClipJigSpec`] holds the few numbers that describe a jig. Dimensions are
//! in millimetres.

use config::constants::{
    DEFAULT_PIN_COUNT_X, DEFAULT_PIN_COUNT_Y, DEFAULT_PIN_HOLE_SIZE, DEFAULT_PIN_PITCH,
    DEFAULT_TARGET_PIN_LENGTH,
};
use serde::{Deserialize, Serialize};

/// Parameters of a pin header clip jig.
///
/// Values are not validated here; a degenerate spec fails when its solid is
/// built.
///
/// # Example
///
/// ```rust
/// use clip_jig::ClipJigSpec;
///
/// let spec = ClipJigSpec::default();
/// assert!((spec.total_x() - 17.78).abs() < 1e-9);
/// assert!((spec.total_y() - 7.62).abs() < 1e-9);
/// assert_eq!(spec.hole_count(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipJigSpec {
    /// Center-to-center spacing of pins.
    pub pin_pitch: f64,
    /// Pins along X.
    pub pin_count_x: u32,
    /// Pins along Y.
    pub pin_count_y: u32,
    /// Hole diameter.
    pub pin_hole_size: f64,
    /// Jig thickness and hole depth.
    ///
    /// ESQ-126-13-G-D header: 7.37 mm post below a 1.6 mm board leaves
    /// 5.77 mm, trimmed to 5.4 mm.
    pub target_pin_length: f64,
}

impl Default for ClipJigSpec {
    fn default() -> Self {
        Self {
            pin_pitch: DEFAULT_PIN_PITCH,
            pin_count_x: DEFAULT_PIN_COUNT_X,
            pin_count_y: DEFAULT_PIN_COUNT_Y,
            pin_hole_size: DEFAULT_PIN_HOLE_SIZE,
            target_pin_length: DEFAULT_TARGET_PIN_LENGTH,
        }
    }
}

impl ClipJigSpec {
    /// Block length along X: the outermost holes sit on the end faces.
    pub fn total_x(&self) -> f64 {
        self.pin_pitch * (f64::from(self.pin_count_x) - 1.0)
    }

    /// Block width along Y: half a pitch of margin on either side.
    pub fn total_y(&self) -> f64 {
        self.pin_pitch * f64::from(self.pin_count_y)
    }

    /// Copy with a different hole diameter.
    #[must_use]
    pub fn with_pin_hole_size(self, pin_hole_size: f64) -> Self {
        Self {
            pin_hole_size,
            ..self
        }
    }

    /// Number of holes drilled.
    pub fn hole_count(&self) -> usize {
        self.pin_count_x as usize * self.pin_count_y as usize
    }
}
