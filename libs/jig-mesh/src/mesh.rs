//! # Mesh Data Structure
//!
//! Core triangle mesh representation shared by primitives, boolean
//! operations and exporters.

use std::collections::HashMap;

use config::constants::{
    MAX_TRIANGLES, MAX_VERTICES, SLIVER_COLLAPSE_DISTANCE, SLIVER_EPSILON, SLIVER_REPAIR_PASSES,
    VERTEX_MERGE_EPSILON,
};
use glam::DVec3;

use crate::error::MeshError;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. Conversion to f32 only happens inside
/// the STL writer.
///
/// # Example
///
/// ```rust
/// use jig_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Unit face normal of a triangle, or zero for a degenerate one.
    pub fn triangle_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangle_corners(index);
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Size of the bounding box along each axis.
    pub fn extent(&self) -> DVec3 {
        let (min, max) = self.bounding_box();
        max - min
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a translated copy, leaving `self` untouched.
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> Mesh {
        let mut mesh = self.clone();
        mesh.translate(offset);
        mesh
    }

    /// Appends another mesh's triangles, reindexed.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or doubled area below
    ///   `SLIVER_EPSILON`)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Like [`Mesh::validate`] but reports what is wrong.
    pub fn check(&self) -> Result<(), MeshError> {
        if self.vertices.len() > MAX_VERTICES {
            return Err(MeshError::validation(format!(
                "{} vertices exceeds the limit of {}",
                self.vertices.len(),
                MAX_VERTICES
            )));
        }
        if self.triangles.len() > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: self.triangles.len(),
                max: MAX_TRIANGLES,
            });
        }

        let vertex_count = self.vertices.len() as u32;

        for (i, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&idx| idx >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "triangle {i} references a missing vertex: {tri:?}"
                )));
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!(
                    "triangle {i} repeats a vertex: {tri:?}"
                )));
            }

            let area = self.doubled_area(*tri);
            if area < SLIVER_EPSILON {
                return Err(MeshError::validation(format!(
                    "triangle {i} is a sliver (doubled area {area:e})"
                )));
            }
        }

        Ok(())
    }

    /// Signed enclosed volume (divergence theorem).
    ///
    /// Positive for a closed mesh with outward-facing winding. Meshes with
    /// T-junctions still give the exact volume because every surface patch
    /// is counted once.
    pub fn volume(&self) -> f64 {
        let sum: f64 = self
            .triangles
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                v0.dot(v1.cross(v2))
            })
            .sum();
        sum / 6.0
    }

    /// Total surface area.
    pub fn surface_area(&self) -> f64 {
        (0..self.triangles.len())
            .map(|i| {
                let [v0, v1, v2] = self.triangle_corners(i);
                (v1 - v0).cross(v2 - v0).length() / 2.0
            })
            .sum()
    }

    /// Merges vertices closer than `VERTEX_MERGE_EPSILON` and drops triangles
    /// that collapse as a result.
    ///
    /// Boolean results are polygon soups with one vertex copy per polygon;
    /// welding turns them back into an indexed mesh.
    pub fn weld_vertices(&mut self) {
        let inv_cell = 1.0 / VERTEX_MERGE_EPSILON;
        let mut lookup: HashMap<(i64, i64, i64), u32> = HashMap::new();
        let mut vertices = Vec::with_capacity(self.vertices.len());
        let mut remap = Vec::with_capacity(self.vertices.len());

        for v in &self.vertices {
            let key = (
                (v.x * inv_cell).round() as i64,
                (v.y * inv_cell).round() as i64,
                (v.z * inv_cell).round() as i64,
            );
            let index = *lookup.entry(key).or_insert_with(|| {
                vertices.push(*v);
                (vertices.len() - 1) as u32
            });
            remap.push(index);
        }

        let triangles = self
            .triangles
            .iter()
            .map(|tri| {
                [
                    remap[tri[0] as usize],
                    remap[tri[1] as usize],
                    remap[tri[2] as usize],
                ]
            })
            .filter(|tri| tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2])
            .collect();

        self.vertices = vertices;
        self.triangles = triangles;
    }

    /// Repairs or removes the slivers [`Mesh::check`] would reject.
    ///
    /// A sliver is flipped against the triangle across its longest edge when
    /// that gives two proper triangles, which keeps the surface closed. A
    /// sliver with an edge shorter than `SLIVER_COLLAPSE_DISTANCE` has that
    /// edge collapsed. Slivers that survive both are dropped.
    ///
    /// Returns the number of slivers handled.
    pub fn remove_degenerate_triangles(&mut self) -> usize {
        let mut handled = 0;
        for _ in 0..SLIVER_REPAIR_PASSES {
            let repaired = self.flip_slivers() + self.collapse_slivers();
            if repaired == 0 {
                break;
            }
            handled += repaired;
        }

        let before = self.triangles.len();
        let vertices = &self.vertices;
        self.triangles.retain(|&tri| !is_sliver(vertices, tri));
        handled + before - self.triangles.len()
    }

    /// Length of `(v1 - v0) x (v2 - v0)`.
    fn doubled_area(&self, tri: [u32; 3]) -> f64 {
        face_cross(&self.vertices, tri).length()
    }

    /// Edge flips for slivers with a matching neighbour. Returns the count.
    fn flip_slivers(&mut self) -> usize {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::with_capacity(self.triangles.len() * 3);
        for (t, tri) in self.triangles.iter().enumerate() {
            for k in 0..3 {
                edges.insert((tri[k], tri[(k + 1) % 3]), t);
            }
        }

        let mut flipped = 0;
        for t in 0..self.triangles.len() {
            let tri = self.triangles[t];
            if has_repeated_vertex(tri) || !is_sliver(&self.vertices, tri) {
                continue;
            }

            let k = self.longest_edge(tri);
            let (a, b, c) = (tri[k], tri[(k + 1) % 3], tri[(k + 2) % 3]);
            let Some(&n) = edges.get(&(b, a)) else {
                continue;
            };
            let other = self.triangles[n];
            let Some(j) = (0..3).find(|&j| other[j] == b && other[(j + 1) % 3] == a) else {
                continue;
            };
            let d = other[(j + 2) % 3];
            if n == t || d == c || edges.contains_key(&(c, d)) || edges.contains_key(&(d, c)) {
                continue;
            }

            // Both replacements must be proper and face the neighbour's way
            let first = [c, a, d];
            let second = [c, d, b];
            let facing = face_cross(&self.vertices, other);
            let acceptable = [first, second].iter().all(|&f| {
                !is_sliver(&self.vertices, f) && face_cross(&self.vertices, f).dot(facing) > 0.0
            });
            if !acceptable {
                continue;
            }

            edges.remove(&(a, b));
            edges.remove(&(b, a));
            self.triangles[t] = first;
            self.triangles[n] = second;
            for (index, face) in [(t, first), (n, second)] {
                for k in 0..3 {
                    edges.insert((face[k], face[(k + 1) % 3]), index);
                }
            }
            flipped += 1;
        }
        flipped
    }

    /// Merges the short edge of needle-shaped slivers. Returns the count.
    fn collapse_slivers(&mut self) -> usize {
        let mut target: Vec<u32> = (0..self.vertices.len() as u32).collect();
        let mut collapsed = 0;

        for &tri in &self.triangles {
            if has_repeated_vertex(tri) || !is_sliver(&self.vertices, tri) {
                continue;
            }
            let Some((p, q)) = self.shortest_edge(tri) else {
                continue;
            };
            let (from, to) = (p.max(q), p.min(q));
            // One collapse per vertex and pass keeps the mapping acyclic
            if target[from as usize] != from || target[to as usize] != to {
                continue;
            }
            target[from as usize] = to;
            collapsed += 1;
        }

        if collapsed == 0 {
            return 0;
        }

        let resolve = |mut v: u32| {
            while target[v as usize] != v {
                v = target[v as usize];
            }
            v
        };
        self.triangles = self
            .triangles
            .iter()
            .map(|tri| tri.map(resolve))
            .filter(|&tri| !has_repeated_vertex(tri))
            .collect();
        collapsed
    }

    /// Index `k` of the longest edge `tri[k] -> tri[k + 1]`.
    fn longest_edge(&self, tri: [u32; 3]) -> usize {
        let length = |k: usize| {
            self.vertex(tri[k])
                .distance_squared(self.vertex(tri[(k + 1) % 3]))
        };
        (0..3)
            .max_by(|&i, &j| length(i).total_cmp(&length(j)))
            .unwrap_or(0)
    }

    /// Endpoints of the shortest edge if it is short enough to collapse.
    fn shortest_edge(&self, tri: [u32; 3]) -> Option<(u32, u32)> {
        (0..3)
            .map(|k| (tri[k], tri[(k + 1) % 3]))
            .map(|(p, q)| (p, q, self.vertex(p).distance(self.vertex(q))))
            .filter(|&(_, _, length)| length < SLIVER_COLLAPSE_DISTANCE)
            .min_by(|x, y| x.2.total_cmp(&y.2))
            .map(|(p, q, _)| (p, q))
    }
}

fn face_cross(vertices: &[DVec3], tri: [u32; 3]) -> DVec3 {
    let [v0, v1, v2] = tri.map(|i| vertices[i as usize]);
    (v1 - v0).cross(v2 - v0)
}

fn has_repeated_vertex(tri: [u32; 3]) -> bool {
    tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2]
}

fn is_sliver(vertices: &[DVec3], tri: [u32; 3]) -> bool {
    has_repeated_vertex(tri) || face_cross(vertices, tri).length() < SLIVER_EPSILON
}
