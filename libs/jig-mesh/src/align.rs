//! # Alignment
//!
//! Decides which point of a primitive's bounding box lands on the local
//! origin. Generalizes the `center: bool` flag of OpenSCAD primitives to one
//! choice per axis.

use glam::DVec3;

/// Placement of a primitive along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Minimum face on the origin, extends towards +axis.
    Min,
    /// Centered on the origin.
    Center,
    /// Maximum face on the origin, extends towards -axis.
    Max,
}

impl Align {
    /// Offset from a min-corner frame for an extent of `size`.
    #[inline]
    pub fn offset(self, size: f64) -> f64 {
        match self {
            Align::Min => 0.0,
            Align::Center => -size / 2.0,
            Align::Max => -size,
        }
    }
}

/// Per-axis alignment of a 3D primitive.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use jig_mesh::Align3;
///
/// // Bottom face centroid on the origin
/// let offset = Align3::ANCHOR_BOTTOM.offset(DVec3::new(4.0, 2.0, 3.0));
/// assert_eq!(offset, DVec3::new(-2.0, -1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Align3 {
    pub x: Align,
    pub y: Align,
    pub z: Align,
}

impl Align3 {
    /// Centered on all axes.
    pub const CENTER: Self = Self::new(Align::Center, Align::Center, Align::Center);

    /// Min corner on the origin.
    pub const MIN: Self = Self::new(Align::Min, Align::Min, Align::Min);

    /// Centroid of the bottom face on the origin, extending upwards.
    pub const ANCHOR_BOTTOM: Self = Self::new(Align::Center, Align::Center, Align::Min);

    pub const fn new(x: Align, y: Align, z: Align) -> Self {
        Self { x, y, z }
    }

    /// Translation that moves a min-corner box of `size` into place.
    pub fn offset(&self, size: DVec3) -> DVec3 {
        DVec3::new(
            self.x.offset(size.x),
            self.y.offset(size.y),
            self.z.offset(size.z),
        )
    }
}

impl Default for Align3 {
    fn default() -> Self {
        Self::CENTER
    }
}
