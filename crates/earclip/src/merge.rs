//! Hole merging: fold every hole into the outer ring through a zero-width slit.
//!
//! Per hole (ordered by leftmost x, ties by insertion order):
//! - anchor `H` = the hole's leftmost point;
//! - outer-ring points are ordered by distance to `H`; the first one whose
//!   segment to `H` is blocked by no edge of the ring, of the hole or of a hole
//!   still waiting, and does not run along an edge at `B`, is the bridge
//!   target `B`;
//! - splice after `B`: `[H, hole clockwise after H, H, B]`.
//!
//! Holes are normalized counter-clockwise first and then spliced in reverse,
//! so the merged ring encloses `outer area - hole areas`.
//!
//! The merge is atomic: all holes are validated against the untouched parent
//! before any splice, and the ring is only replaced once every hole is in.

use std::cmp::Ordering;

use tracing::debug;

use crate::cfg::POINT_EPS;
use crate::error::EarClipError;
use crate::point::{approx_eq, cross, distance_squared, Point};
use crate::predicates::{locally_inside, segments_intersect, EndpointTouch, Intersection};
use crate::ring::Polygon;
use crate::winding::{winding_of, Winding, YAxis};

/// Merge all holes of `polygon` into its outer ring.
///
/// On success the polygon has zero holes and `outer + Σ(hole + 2)` points.
/// On failure it is left exactly as it was.
pub fn merge_holes(polygon: &mut Polygon) -> Result<(), EarClipError> {
    if polygon.hole_count() == 0 {
        return Ok(());
    }
    let count = polygon.point_count();
    if count < 3 {
        return Err(EarClipError::InvalidPolygon { count, hole: None });
    }
    for (index, hole) in polygon.holes().iter().enumerate() {
        validate_hole(polygon, index, hole)?;
    }

    let y_axis = polygon.y_axis();
    let mut ring = counter_clockwise(polygon.points(), y_axis);
    let mut holes: Vec<(usize, Vec<Point>)> = polygon
        .holes()
        .iter()
        .enumerate()
        .map(|(index, hole)| (index, counter_clockwise(hole.points(), y_axis)))
        .collect();
    // Stable: equal leftmost x keeps insertion order.
    holes.sort_by(|a, b| leftmost_x(&a.1).total_cmp(&leftmost_x(&b.1)));

    for (k, (index, hole)) in holes.iter().enumerate() {
        let anchor_at = leftmost_index(hole);
        let anchor = hole[anchor_at];
        let target = find_bridge(&ring, hole, &holes[k + 1..], anchor)
            .ok_or(EarClipError::NoVisibleBridge { hole: *index })?;
        let at = pick_copy(&ring, target, anchor, y_axis);
        debug!(
            hole = *index,
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            bridge_x = ring[at].x,
            bridge_y = ring[at].y,
            "bridged hole"
        );
        splice(&mut ring, at, hole, anchor_at);
    }

    polygon.replace_merged(ring);
    Ok(())
}

fn validate_hole(parent: &Polygon, index: usize, hole: &Polygon) -> Result<(), EarClipError> {
    if hole.point_count() < 3 {
        return Err(EarClipError::InvalidPolygon {
            count: hole.point_count(),
            hole: Some(index),
        });
    }
    if hole.hole_count() > 0 {
        return Err(EarClipError::NestedHole { hole: index });
    }
    if let Some(p) = hole.points().iter().find(|p| !parent.contains_point(**p)) {
        return Err(EarClipError::PointOutsideParent {
            hole: index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}

fn counter_clockwise(points: &[Point], y_axis: YAxis) -> Vec<Point> {
    let mut out = points.to_vec();
    if winding_of(&out, y_axis) == Winding::Clockwise {
        out.reverse();
    }
    out
}

/// Index of the smallest x; the first one wins ties.
fn leftmost_index(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.x < points[best].x {
            best = i;
        }
    }
    best
}

fn leftmost_x(points: &[Point]) -> f64 {
    points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
}

/// Nearest ring point with an unobstructed segment to `anchor`.
fn find_bridge(ring: &[Point], hole: &[Point], pending: &[(usize, Vec<Point>)], anchor: Point) -> Option<usize> {
    let mut order: Vec<usize> = (0..ring.len()).collect();
    order.sort_by(|&a, &b| by_distance(ring[a], ring[b], anchor));
    order.into_iter().find(|&i| {
        let target = ring[i];
        !blocked_by(ring, target, anchor)
            && !blocked_by(hole, target, anchor)
            && !pending.iter().any(|(_, p)| blocked_by(p, target, anchor))
    })
}

fn by_distance(a: Point, b: Point, anchor: Point) -> Ordering {
    distance_squared(a, anchor).total_cmp(&distance_squared(b, anchor))
}

/// Whether any edge of the closed ring `edges` obstructs the bridge `b → h`.
///
/// Edges sharing an endpoint with the bridge obstruct it by running along it,
/// and an edge at the target `b` also by lying anywhere on the bridge line.
/// Every other edge obstructs on any contact.
fn blocked_by(edges: &[Point], b: Point, h: Point) -> bool {
    let n = edges.len();
    (0..n).any(|i| {
        let e0 = edges[i];
        let e1 = edges[(i + 1) % n];
        let at_target = approx_eq(e0, b) || approx_eq(e1, b);
        if at_target && on_line(e0, b, h) && on_line(e1, b, h) {
            return true;
        }
        if at_target || approx_eq(e0, h) || approx_eq(e1, h) {
            segments_intersect(b, h, e0, e1, EndpointTouch::Ignored) == Intersection::Collinear
        } else {
            !segments_intersect(b, h, e0, e1, EndpointTouch::Counts).is_disjoint()
        }
    })
}

/// `p` within [`POINT_EPS`] of the infinite line through `a` and `b`.
fn on_line(p: Point, a: Point, b: Point) -> bool {
    let d = b - a;
    cross(d, p - a).abs() <= POINT_EPS * d.norm()
}

/// Among the copies of `ring[target]` left by earlier bridges, the one whose
/// interior wedge faces `anchor`.
fn pick_copy(ring: &[Point], target: usize, anchor: Point, y_axis: YAxis) -> usize {
    let n = ring.len();
    let at = ring[target];
    (0..n)
        .filter(|&i| approx_eq(ring[i], at))
        .find(|&i| locally_inside(ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n], anchor, y_axis))
        .unwrap_or(target)
}

/// Insert `[H, hole clockwise after H, H, B]` right after `ring[at]`.
fn splice(ring: &mut Vec<Point>, at: usize, hole: &[Point], anchor_at: usize) {
    let m = hole.len();
    let mut slit = Vec::with_capacity(m + 2);
    slit.push(hole[anchor_at]);
    for k in 1..m {
        slit.push(hole[(anchor_at + m - k) % m]);
    }
    slit.push(hole[anchor_at]);
    slit.push(ring[at]);
    ring.splice(at + 1..at + 1, slit);
}
