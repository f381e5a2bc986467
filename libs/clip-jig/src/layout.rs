//! # Hole Layout
//!
//! Positions of the hole axes in the XY plane.

use glam::DVec2;

use crate::spec::ClipJigSpec;

/// `count` positions `spacing` apart, centered on zero.
///
/// # Example
///
/// ```rust
/// use clip_jig::layout::evenly_space_with_center;
///
/// assert_eq!(evenly_space_with_center(3, 2.0), vec![-2.0, 0.0, 2.0]);
/// assert_eq!(evenly_space_with_center(2, 2.0), vec![-1.0, 1.0]);
/// assert!(evenly_space_with_center(0, 2.0).is_empty());
/// ```
pub fn evenly_space_with_center(count: u32, spacing: f64) -> Vec<f64> {
    let half_span = (f64::from(count) - 1.0) / 2.0;
    (0..count)
        .map(|i| (f64::from(i) - half_span) * spacing)
        .collect()
}

/// Every hole center of `spec`, X-major.
pub fn hole_centers(spec: &ClipJigSpec) -> Vec<DVec2> {
    let xs = evenly_space_with_center(spec.pin_count_x, spec.pin_pitch);
    let ys = evenly_space_with_center(spec.pin_count_y, spec.pin_pitch);

    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| DVec2::new(x, y)))
        .collect()
}
