//! Error kinds surfaced by the geometric core and the record format.

use thiserror::Error;

use crate::point::Point;

/// Errors surfaced by merging and triangulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EarClipError {
    /// A ring has fewer than three points. `hole` is `None` for the outer ring.
    #[error("{} has {count} points; at least 3 are required", ring_label(.hole))]
    InvalidPolygon { count: usize, hole: Option<usize> },
    /// A hole point lies outside of (or on the boundary of) the parent ring.
    #[error("hole {hole}: point ({x}, {y}) lies outside of the parent polygon")]
    PointOutsideParent { hole: usize, x: f64, y: f64 },
    /// No parent point has an unobstructed line of sight to the hole.
    #[error("hole {hole}: no parent point is visible from the hole's reference point")]
    NoVisibleBridge { hole: usize },
    /// Holes cannot own holes; islands are separate polygons.
    #[error("hole {hole} owns holes of its own")]
    NestedHole { hole: usize },
    /// A full pass over the ring found no ear (not simple, or wrong winding).
    #[error("no valid ear among the {remaining} remaining points")]
    NoEarFound { remaining: usize },
}

fn ring_label(hole: &Option<usize>) -> String {
    match hole {
        Some(i) => format!("hole {i}"),
        None => "polygon".to_string(),
    }
}

/// Errors surfaced while reading persisted ear records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("ear record stream is empty (missing count header)")]
    MissingHeader,
    #[error("ear count header {0:?} is not a decimal count")]
    BadHeader(String),
    /// `parsed` holds every triangle read before the offending line.
    #[error("malformed ear record on line {line}: {reason}")]
    MalformedRecord {
        line: usize,
        reason: &'static str,
        parsed: Vec<[Point; 3]>,
    },
    #[error("expected {expected} ear records, found {}", .parsed.len())]
    Truncated {
        expected: usize,
        parsed: Vec<[Point; 3]>,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RecordError {
    /// Triangles successfully read before the failure, if any were kept.
    pub fn parsed(&self) -> &[[Point; 3]] {
        match self {
            RecordError::MalformedRecord { parsed, .. } | RecordError::Truncated { parsed, .. } => {
                parsed
            }
            _ => &[],
        }
    }
}
