//! # Polygon for BSP Operations
//!
//! Convex polygon with plane and splitting support.

use super::plane::{Classification, Plane};
use super::vertex::Vertex;

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with associated plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<Vertex>,
    /// Plane containing this polygon.
    plane: Plane,
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns None if vertices don't form a valid polygon.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let plane = Plane::from_points(vertices[0].pos, vertices[1].pos, vertices[2].pos)?;
        Some(Self { vertices, plane })
    }

    /// Get polygon vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flip the polygon (reverse winding order and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front_count = 0;
        let mut back_count = 0;

        for v in &self.vertices {
            match plane.classify_point(v.pos) {
                Classification::Front => front_count += 1,
                Classification::Back => back_count += 1,
                _ => {}
            }
        }

        if front_count > 0 && back_count > 0 {
            Classification::Spanning
        } else if front_count > 0 {
            Classification::Front
        } else if back_count > 0 {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Split polygon by a plane.
    ///
    /// ## Parameters
    ///
    /// - `plane`: Splitting plane
    /// - `coplanar_front`: Output for coplanar polygons facing same direction
    /// - `coplanar_back`: Output for coplanar polygons facing opposite direction
    /// - `front`: Output for polygons in front of plane
    /// - `back`: Output for polygons behind plane
    pub fn split(
        self,
        plane: &Plane,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    coplanar_front.push(self);
                } else {
                    coplanar_back.push(self);
                }
            }
            Classification::Front => front.push(self),
            Classification::Back => back.push(self),
            Classification::Spanning => {
                let n = self.vertices.len();
                let mut front_verts = Vec::with_capacity(n + 1);
                let mut back_verts = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let vi = &self.vertices[i];
                    let vj = &self.vertices[(i + 1) % n];

                    let ti = plane.classify_point(vi.pos);
                    let tj = plane.classify_point(vj.pos);

                    if ti != Classification::Back {
                        front_verts.push(*vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(*vi);
                    }

                    // Edge crosses the plane
                    if (ti == Classification::Front && tj == Classification::Back)
                        || (ti == Classification::Back && tj == Classification::Front)
                    {
                        let di = plane.signed_distance(vi.pos);
                        let dj = plane.signed_distance(vj.pos);
                        let intersection = vi.lerp(vj, di / (di - dj));
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                // Pieces keep the parent plane; recomputing it from sliver
                // corners would drift.
                if front_verts.len() >= 3 {
                    front.push(Polygon {
                        vertices: front_verts,
                        plane: self.plane,
                    });
                }
                if back_verts.len() >= 3 {
                    back.push(Polygon {
                        vertices: back_verts,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
