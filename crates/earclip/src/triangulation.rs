//! Triangulation result: deduplicated vertex buffer plus flat index buffer.
//!
//! Invariants
//! - `indices.len() == 3 * triangle_count()`.
//! - No two stored vertices are equal within `POINT_EPS`; `add_ear` reuses
//!   the index of an existing vertex instead of storing a copy (bridge copies
//!   of a merged ring therefore collapse onto one vertex).

use crate::point::{approx_eq, Point};
use crate::predicates::triangle_area;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    vertices: Vec<Point>,
    indices: Vec<u32>,
}

impl Triangulation {
    /// Empty result sized for a ring of `points` points (`points - 2` ears).
    pub fn with_capacity(points: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(points),
            indices: Vec::with_capacity(3 * points.saturating_sub(2)),
        }
    }

    /// Append one triangle, in the given corner order.
    ///
    /// # Panics
    /// If the vertex buffer outgrows the `u32` index range.
    pub fn add_ear(&mut self, a: Point, b: Point, c: Point) {
        for p in [a, b, c] {
            let idx = self.vertex_index(p);
            self.indices.push(idx);
        }
    }

    // Linear lookup; rings are tens to hundreds of points.
    fn vertex_index(&mut self, p: Point) -> u32 {
        let i = match self.vertices.iter().position(|v| approx_eq(*v, p)) {
            Some(i) => i,
            None => {
                self.vertices.push(p);
                self.vertices.len() - 1
            }
        };
        u32::try_from(i).expect("vertex count exceeds the u32 index range")
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Triangles as corner triples, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }

    /// Sum of the unsigned triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| triangle_area(a, b, c))
            .sum()
    }
}
