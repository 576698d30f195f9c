//! Winding classification under a configurable y-axis convention.
//!
//! The shoelace-style sum `Σ (x₂ - x₁)(y₂ + y₁)` is negative for a
//! counter-clockwise ring when y points up. With y pointing down (screen
//! coordinates, origin upper-left) the same point order looks clockwise, so
//! every orientation-dependent predicate multiplies by [`YAxis::sign`].

use crate::point::Point;
use crate::predicates::signed_winding_sum;

/// Direction of the positive y-axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// Origin lower-left (mathematical convention).
    #[default]
    Up,
    /// Origin upper-left (screen convention).
    Down,
}

impl YAxis {
    /// `+1` for y-up, `-1` for y-down.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            YAxis::Up => 1.0,
            YAxis::Down => -1.0,
        }
    }
}

/// Rotational direction implied by a ring's point order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

/// Classify the winding of `points` as seen under `y_axis`.
///
/// A zero sum (degenerate ring) is reported as counter-clockwise so that
/// orientation stays a no-op on it.
pub fn winding_of(points: &[Point], y_axis: YAxis) -> Winding {
    let sum = signed_winding_sum(points) * y_axis.sign();
    if sum > 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Signed enclosed area, positive for the canonical (counter-clockwise) winding.
pub fn canonical_signed_area(points: &[Point], y_axis: YAxis) -> f64 {
    -0.5 * signed_winding_sum(points) * y_axis.sign()
}
