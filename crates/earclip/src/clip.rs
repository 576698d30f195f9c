//! Ear clipping over a single ring.
//!
//! The ring is an arena (`&[Point]`) plus a cyclic index-linked list
//! (`prev`/`next` arrays); clipping unlinks an index and never moves points.
//!
//! Scan loop
//! - Start at vertex 0. A vertex is an ear iff its turn is convex and no other
//!   live vertex lies in the triangle `(prev, curr, next)`. Other vertices are
//!   told apart from the corners by index, not by location: a bridge copy
//!   sitting on a corner blocks when its own interior wedge reaches into the
//!   ear, and a flat ear is blocked by any vertex on its base.
//! - Clip: emit `(prev, curr, next)`, unlink `curr`, continue at `next`.
//!   Otherwise advance to `next`.
//! - Three vertices left: emit them and stop.
//!
//! Each step either shrinks the ring or advances; a full lap without a clip
//! means the input was not a simple canonically wound ring and is reported as
//! [`EarClipError::NoEarFound`].

use tracing::debug;

use crate::error::EarClipError;
use crate::merge::merge_holes;
use crate::cfg::COLLINEAR_EPS;
use crate::point::{approx_eq, cross, Point};
use crate::predicates::{is_convex_vertex, locally_inside, point_in_triangle, point_on_segment};
use crate::ring::Polygon;
use crate::triangulation::Triangulation;
use crate::winding::YAxis;

/// Triangulate a polygon (holes included) without touching the caller's copy.
///
/// Pipeline: clone, orient every ring counter-clockwise, fold holes into the
/// outer ring, clip ears.
pub fn triangulate(polygon: &Polygon) -> Result<Triangulation, EarClipError> {
    let mut work = polygon.clone();
    work.orientate_all();
    if work.hole_count() > 0 {
        merge_holes(&mut work)?;
    }
    clip_ears(work.points(), work.y_axis())
}

/// Clip an already merged, counter-clockwise ring into `n - 2` triangles.
pub fn clip_ears(points: &[Point], y_axis: YAxis) -> Result<Triangulation, EarClipError> {
    let n = points.len();
    if n < 3 {
        return Err(EarClipError::InvalidPolygon {
            count: n,
            hole: None,
        });
    }
    let mut prev: Vec<usize> = (0..n).map(|i| (i + n - 1) % n).collect();
    let mut next: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
    let mut out = Triangulation::with_capacity(n);

    let mut remaining = n;
    let mut curr = 0;
    let mut misses = 0;
    let mut steps = 0usize;
    while remaining > 3 {
        let p = prev[curr];
        let nx = next[curr];
        steps += 1;
        if is_ear(points, &prev, &next, curr, y_axis) {
            out.add_ear(points[p], points[curr], points[nx]);
            next[p] = nx;
            prev[nx] = p;
            remaining -= 1;
            misses = 0;
        } else {
            misses += 1;
            if misses >= remaining {
                return Err(EarClipError::NoEarFound { remaining });
            }
        }
        curr = nx;
    }
    out.add_ear(points[prev[curr]], points[curr], points[next[curr]]);
    debug!(points = n, triangles = out.triangle_count(), steps, "clipped ring");
    Ok(out)
}

fn is_ear(points: &[Point], prev: &[usize], next: &[usize], curr: usize, y_axis: YAxis) -> bool {
    let (p, nx) = (prev[curr], next[curr]);
    let (a, b, c) = (points[p], points[curr], points[nx]);
    if !is_convex_vertex(a, b, c, y_axis) {
        return false;
    }
    let flat = is_flat(a, b, c);
    let centroid = (a + b + c) / 3.0;
    let mut i = next[nx];
    while i != p {
        let q = points[i];
        let blocks = if flat {
            !approx_eq(q, a) && !approx_eq(q, c) && point_on_segment(q, a, c)
        } else if approx_eq(q, a) || approx_eq(q, b) || approx_eq(q, c) {
            locally_inside(points[prev[i]], q, points[next[i]], centroid, y_axis)
        } else {
            point_in_triangle(q, a, b, c)
        };
        if blocks {
            return false;
        }
        i = next[i];
    }
    true
}

/// Zero-area corner, straight or folded back.
fn is_flat(a: Point, b: Point, c: Point) -> bool {
    let (v0, v1) = (c - a, b - a);
    let d = cross(v0, v1);
    d * d <= COLLINEAR_EPS * v0.norm_squared() * v1.norm_squared()
}
