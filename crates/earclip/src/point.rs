//! 2D point/vector primitive.
//!
//! `Point` is a plain `nalgebra::Vector2<f64>`: addition, subtraction and
//! `dot` come from nalgebra; this module adds the scalar 2D cross product and
//! the tolerance-aware equality used throughout the crate.

use nalgebra::Vector2;

use crate::cfg::POINT_EPS;

/// A point (or free vector) in the plane.
pub type Point = Vector2<f64>;

/// Shorthand constructor.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` is counter-clockwise from `a` in y-up coordinates.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Point equality within [`POINT_EPS`] on each axis.
#[inline]
pub fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= POINT_EPS && (a.y - b.y).abs() <= POINT_EPS
}

#[inline]
pub(crate) fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}
