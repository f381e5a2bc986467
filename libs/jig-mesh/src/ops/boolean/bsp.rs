//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Stack Safety
//!
//! All traversals use explicit work stacks, so tree depth is bounded by heap
//! memory only. Dropping a tree is iterative as well.

use super::plane::Plane;
use super::polygon::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Dividing plane, taken from the first polygon added to this node
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
    /// Front subtree (polygons in front of plane)
    front: Option<Box<BspNode>>,
    /// Back subtree (polygons behind plane)
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into the tree, extending it where needed.
    ///
    /// The first polygon reaching an empty node supplies its plane.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            let Some(first) = polys.first() else {
                continue;
            };
            let plane = *node.plane.get_or_insert(*first.plane());

            let estimated_size = polys.len() / 2 + 1;
            let mut coplanar_back = Vec::new();
            let mut front_polys = Vec::with_capacity(estimated_size);
            let mut back_polys = Vec::with_capacity(estimated_size);

            for poly in polys {
                poly.split(
                    &plane,
                    &mut node.polygons,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            node.polygons.append(&mut coplanar_back);

            let BspNode { front, back, .. } = node;
            if !front_polys.is_empty() {
                let child = front.get_or_insert_with(Box::default);
                stack.push((child.as_mut(), front_polys));
            }
            if !back_polys.is_empty() {
                let child = back.get_or_insert_with(Box::default);
                stack.push((child.as_mut(), back_polys));
            }
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            for poly in &mut node.polygons {
                poly.flip();
            }
            if let Some(plane) = node.plane.as_mut() {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            let BspNode { front, back, .. } = node;
            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::with_capacity(polygons.len());
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();

            for poly in polys {
                poly.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            front_polys.append(&mut coplanar_front);
            back_polys.append(&mut coplanar_back);

            match node.front.as_deref() {
                Some(child) => stack.push((child, front_polys)),
                None => result.extend(front_polys),
            }
            // Behind a leaf plane is solid.
            if let Some(child) = node.back.as_deref() {
                stack.push((child, back_polys));
            }
        }

        result
    }

    /// Removes every polygon of this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);

            let BspNode { front, back, .. } = node;
            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Collects all polygons in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        result
    }

    /// Number of polygons stored in the tree.
    pub fn polygon_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            count += node.polygons.len();
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        count
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&BspNode, usize)> = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(front) = node.front.as_deref() {
                stack.push((front, depth + 1));
            }
            if let Some(back) = node.back.as_deref() {
                stack.push((back, depth + 1));
            }
        }

        max_depth
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
