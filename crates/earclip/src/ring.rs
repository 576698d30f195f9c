//! Polygon ring with holes.
//!
//! A `Polygon` is one closed, cyclic sequence of points (no explicit start or
//! end; traversal wraps) plus zero or more hole rings. Holes are attached
//! before merging and consumed by [`crate::merge_holes`].
//!
//! Invariants
//! - No two consecutive points coincide (cyclically, within `POINT_EPS`);
//!   `add_point` refuses such points. Non-adjacent duplicates are allowed and
//!   appear after merging (bridge copies).
//! - The cached bounding box always covers exactly the current points.
//! - Canonical orientation is counter-clockwise under `y_axis`.

use crate::error::EarClipError;
use crate::point::{approx_eq, Point};
use crate::predicates::point_on_segment;
use crate::triangulation::Triangulation;
use crate::winding::{canonical_signed_area, winding_of, Winding, YAxis};

/// Axis-aligned bounding box (min/max corners).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Constructs a bounding box from a list of points; `None` when empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox {
            min: *first,
            max: *first,
        };
        for p in rest {
            bbox.include(*p);
        }
        Some(bbox)
    }

    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// One simple closed ring plus its hole rings.
#[derive(Clone, Debug, Default)]
pub struct Polygon {
    y_axis: YAxis,
    points: Vec<Point>,
    bbox: Option<BoundingBox>,
    holes: Vec<Polygon>,
}

impl Polygon {
    /// Empty polygon using the given y-axis convention.
    pub fn new(y_axis: YAxis) -> Self {
        Self {
            y_axis,
            ..Self::default()
        }
    }

    /// Build from points via repeated [`Polygon::add_point`] (coincident
    /// neighbours are dropped).
    pub fn from_points<I>(y_axis: YAxis, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut poly = Self::new(y_axis);
        for p in points {
            poly.add_point(p);
        }
        poly
    }

    #[inline]
    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    /// Append `p`; returns `false` (ring unchanged) if `p` coincides with the
    /// last point or, cyclically, with the first.
    pub fn add_point(&mut self, p: Point) -> bool {
        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            if approx_eq(*last, p) || approx_eq(*first, p) {
                return false;
            }
        }
        match self.bbox.as_mut() {
            Some(bbox) => bbox.include(p),
            None => {
                self.bbox = Some(BoundingBox { min: p, max: p });
            }
        }
        self.points.push(p);
        true
    }

    /// Remove the point at `index`.
    ///
    /// Returns `None` (ring unchanged) if `index` is out of range or if the
    /// two points around it coincide, which would leave them neighbours.
    pub fn remove_at(&mut self, index: usize) -> Option<Point> {
        let n = self.points.len();
        if index >= n {
            return None;
        }
        if n >= 3 && approx_eq(self.points[(index + n - 1) % n], self.points[(index + 1) % n]) {
            return None;
        }
        let p = self.points.remove(index);
        self.refresh_bbox();
        Some(p)
    }

    /// Remove the first point equal (within tolerance) to `p`; same refusal
    /// rule as [`Polygon::remove_at`].
    pub fn remove_point(&mut self, p: Point) -> bool {
        match self.find_point(p) {
            Some(i) => self.remove_at(i).is_some(),
            None => false,
        }
    }

    /// Remove the most recently added point.
    pub fn pop_point(&mut self) -> Option<Point> {
        let last = self.points.len().checked_sub(1)?;
        self.remove_at(last)
    }

    /// Index of the first point equal (within tolerance) to `p`.
    pub fn find_point(&self, p: Point) -> Option<usize> {
        self.points.iter().position(|q| approx_eq(*q, p))
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// Strict interior test (even-odd ray casting).
    ///
    /// Rings with fewer than 3 points contain nothing; points outside the
    /// bounding box are rejected early; points on an edge are not contained.
    pub fn contains_point(&self, p: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        match &self.bbox {
            Some(bbox) if bbox.contains(p) => {}
            _ => return false,
        }
        let mut inside = false;
        for i in 0..n {
            let curr = self.points[i];
            let next = self.points[(i + 1) % n];
            if point_on_segment(p, curr, next) {
                return false;
            }
            if (curr.y > p.y) != (next.y > p.y)
                && p.x < (next.x - curr.x) * (p.y - curr.y) / (next.y - curr.y) + curr.x
            {
                inside = !inside;
            }
        }
        inside
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        winding_of(&self.points, self.y_axis)
    }

    /// Enclosed area, positive for the canonical winding.
    pub fn signed_area(&self) -> f64 {
        canonical_signed_area(&self.points, self.y_axis)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Reverse the point order iff the ring is not counter-clockwise.
    ///
    /// Returns whether the order was reversed.
    pub fn orientate(&mut self) -> bool {
        if self.winding() == Winding::CounterClockwise {
            return false;
        }
        self.points.reverse();
        true
    }

    /// [`Polygon::orientate`] on this ring and, recursively, on every hole.
    pub fn orientate_all(&mut self) {
        self.orientate();
        for hole in &mut self.holes {
            hole.orientate_all();
        }
    }

    /// Attach a hole ring; it is validated and consumed by [`crate::merge_holes`].
    pub fn add_hole(&mut self, hole: Polygon) {
        self.holes.push(hole);
    }

    #[inline]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    #[inline]
    pub fn hole(&self, index: usize) -> Option<&Polygon> {
        self.holes.get(index)
    }

    #[inline]
    pub fn holes(&self) -> &[Polygon] {
        &self.holes
    }

    pub fn remove_hole(&mut self, index: usize) -> Option<Polygon> {
        if index < self.holes.len() {
            Some(self.holes.remove(index))
        } else {
            None
        }
    }

    /// Triangulate a copy of this polygon (see [`crate::triangulate`]).
    pub fn triangulate(&self) -> Result<Triangulation, EarClipError> {
        crate::clip::triangulate(self)
    }

    /// Replace the ring and drop all holes (merger commit).
    pub(crate) fn replace_merged(&mut self, points: Vec<Point>) {
        self.points = points;
        self.holes.clear();
        self.refresh_bbox();
    }

    fn refresh_bbox(&mut self) {
        self.bbox = BoundingBox::from_points(&self.points);
    }
}
