//! # Vertex for BSP Operations
//!
//! Polygon corner with linear interpolation support.

use glam::DVec3;

// =============================================================================
// VERTEX
// =============================================================================

/// Polygon corner used by the BSP kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in space.
    pub pos: DVec3,
}

impl Vertex {
    /// Create new vertex.
    pub fn new(pos: DVec3) -> Self {
        Self { pos }
    }

    /// Linear interpolation between two vertices.
    ///
    /// ## Parameters
    ///
    /// - `other`: Target vertex
    /// - `t`: Interpolation factor (0.0 = self, 1.0 = other)
    pub fn lerp(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex {
            pos: self.pos.lerp(other.pos, t),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_lerp() {
        let a = Vertex::new(DVec3::ZERO);
        let b = Vertex::new(DVec3::splat(10.0));
        let mid = a.lerp(&b, 0.5);
        assert!((mid.pos - DVec3::splat(5.0)).length() < 1e-10);
    }

    #[test]
    fn test_vertex_lerp_endpoints() {
        let a = Vertex::new(DVec3::new(1.0, 2.0, 3.0));
        let b = Vertex::new(DVec3::new(-1.0, 0.0, 7.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }
}
