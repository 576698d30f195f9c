//! Geometry predicates shared by the ring, the hole merger and the clipper.
//!
//! All orientation-dependent predicates take a [`YAxis`] so that "convex"
//! and "left of" always mean the same thing as the canonical
//! counter-clockwise winding enforced by [`crate::Polygon::orientate`].
//!
//! Tolerances
//! - Point coincidence uses [`POINT_EPS`].
//! - Degenerate triangles and parallel segments use the relative
//!   [`COLLINEAR_EPS`]; segment parameters use [`PARAM_EPS`].

use crate::cfg::{COLLINEAR_EPS, PARAM_EPS, POINT_EPS};
use crate::point::{approx_eq, cross, Point};
use crate::winding::YAxis;

/// Whether a touch at a segment endpoint counts as an intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointTouch {
    Counts,
    Ignored,
}

/// Outcome of [`segments_intersect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intersection {
    Disjoint,
    Crossing,
    /// Collinear segments sharing a stretch of positive length (degenerate input).
    Collinear,
}

impl Intersection {
    #[inline]
    pub fn is_disjoint(self) -> bool {
        matches!(self, Intersection::Disjoint)
    }
}

/// Signed area term `prev.x*(next.y-curr.y) + curr.x*(prev.y-next.y) + next.x*(curr.y-prev.y)`.
///
/// Twice the signed triangle area with the sign flipped: negative for a left
/// turn `prev → curr → next` in y-up coordinates.
#[inline]
pub fn turn(prev: Point, curr: Point, next: Point) -> f64 {
    prev.x * (next.y - curr.y) + curr.x * (prev.y - next.y) + next.x * (curr.y - prev.y)
}

/// True iff `curr` is a convex (or straight) turn for a canonically wound ring.
///
/// Equivalent to `(curr - prev) × (next - curr) ≥ 0` after the y-axis sign.
#[inline]
pub fn is_convex_vertex(prev: Point, curr: Point, next: Point, y_axis: YAxis) -> bool {
    -turn(prev, curr, next) * y_axis.sign() >= 0.0
}

/// Barycentric point-in-triangle test with closed edges.
///
/// Points coinciding with a corner are never inside; bridge copies sitting on
/// a corner are judged by the clipper's wedge test instead. A degenerate
/// triangle contains nothing.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    if approx_eq(p, a) || approx_eq(p, b) || approx_eq(p, c) {
        return false;
    }
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;
    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);
    let denom = d00 * d11 - d01 * d01;
    // denom = |v0 × v1|², so this compares sin² of the corner angle.
    if denom <= COLLINEAR_EPS * d00 * d11 {
        return false;
    }
    let u = (d11 * d20 - d01 * d21) / denom;
    let v = (d00 * d21 - d01 * d20) / denom;
    (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) && u + v <= 1.0
}

/// Intersection of segments `a0a1` and `b0b1`.
///
/// Solves `a0 + t·r = b0 + u·s` with 2D cross products. Parallel segments are
/// disjoint unless they are collinear and overlap with positive length, which
/// is reported as [`Intersection::Collinear`]. A contact exactly at an
/// endpoint of either segment is governed by `touch`.
pub fn segments_intersect(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
    touch: EndpointTouch,
) -> Intersection {
    let r = a1 - a0;
    let s = b1 - b0;
    let qp = b0 - a0;
    let r_len = r.norm();
    let s_len = s.norm();
    if r_len <= POINT_EPS || s_len <= POINT_EPS {
        return Intersection::Disjoint;
    }
    let on_touch = match touch {
        EndpointTouch::Counts => Intersection::Crossing,
        EndpointTouch::Ignored => Intersection::Disjoint,
    };
    let denom = cross(r, s);
    if denom.abs() <= COLLINEAR_EPS * r_len * s_len {
        // Parallel; collinear iff b0 lies on the line through a.
        if cross(qp, r).abs() / r_len > POINT_EPS {
            return Intersection::Disjoint;
        }
        let rr = r_len * r_len;
        let t0 = qp.dot(&r) / rr;
        let t1 = (b1 - a0).dot(&r) / rr;
        let overlap = t0.max(t1).min(1.0) - t0.min(t1).max(0.0);
        return if overlap > PARAM_EPS {
            Intersection::Collinear
        } else if overlap >= -PARAM_EPS {
            on_touch
        } else {
            Intersection::Disjoint
        };
    }
    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;
    let outside = |x: f64| x < -PARAM_EPS || x > 1.0 + PARAM_EPS;
    if outside(t) || outside(u) {
        return Intersection::Disjoint;
    }
    let at_end = |x: f64| x <= PARAM_EPS || x >= 1.0 - PARAM_EPS;
    if at_end(t) || at_end(u) {
        on_touch
    } else {
        Intersection::Crossing
    }
}

/// `Σ (next.x - curr.x) * (next.y + curr.y)` over the closed ring.
///
/// Equals `-2 · area` in y-up coordinates: negative for counter-clockwise.
pub fn signed_winding_sum(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let curr = points[i];
        let next = points[(i + 1) % n];
        sum += (next.x - curr.x) * (next.y + curr.y);
    }
    sum
}

/// Whether the direction `v → target` lies inside the interior wedge at `v`
/// of a canonically wound ring with neighbours `prev` and `next`.
pub fn locally_inside(prev: Point, v: Point, next: Point, target: Point, y_axis: YAxis) -> bool {
    let s = y_axis.sign();
    let left_of = |a: Point, b: Point| cross(b - a, target - a) * s;
    if is_convex_vertex(prev, v, next, y_axis) {
        left_of(prev, v) >= 0.0 && left_of(v, next) >= 0.0
    } else {
        left_of(prev, v) > 0.0 || left_of(v, next) > 0.0
    }
}

/// Whether `p` lies within [`POINT_EPS`] of the closed segment `ab`.
pub fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    let ab = b - a;
    let len2 = ab.norm_squared();
    let closest = if len2 <= POINT_EPS * POINT_EPS {
        a
    } else {
        let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
        a + ab * t
    };
    (p - closest).norm() <= POINT_EPS
}

/// Unsigned triangle area.
#[inline]
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    0.5 * cross(b - a, c - a).abs()
}
