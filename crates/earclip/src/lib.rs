//! Ear-clipping triangulation of simple polygons with holes.
//!
//! Pipeline
//! - Build a [`Polygon`] (outer ring plus optional hole rings).
//! - Normalize winding to counter-clockwise under the polygon's [`YAxis`].
//! - Fold holes into the outer ring through bridge slits ([`merge_holes`]).
//! - Clip ears until three points remain ([`clip_ears`]).
//!
//! [`triangulate`] runs all of the above on a copy of the caller's polygon.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is per-axis within
//!   [`cfg::POINT_EPS`].
//! - "Counter-clockwise" is judged under the configured y-axis, so screen
//!   coordinates (`YAxis::Down`) and math coordinates (`YAxis::Up`) both work.

pub mod cfg;
pub mod clip;
pub mod error;
pub mod merge;
pub mod point;
pub mod predicates;
pub mod record;
pub mod ring;
pub mod sample;
pub mod triangulation;
pub mod winding;

pub use clip::{clip_ears, triangulate};
pub use error::{EarClipError, RecordError};
pub use merge::merge_holes;
pub use point::{point, Point};
pub use ring::{BoundingBox, Polygon};
pub use triangulation::Triangulation;
pub use winding::{Winding, YAxis};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{clip_ears, triangulate};
    pub use crate::error::{EarClipError, RecordError};
    pub use crate::merge::merge_holes;
    pub use crate::point::{point, Point};
    pub use crate::record::{parse_records, read_records, to_records_string, write_records};
    pub use crate::ring::Polygon;
    pub use crate::sample::{draw_star, draw_star_with_hole, ReplayToken, StarCfg, VertexCount};
    pub use crate::triangulation::Triangulation;
    pub use crate::winding::{Winding, YAxis};
}

#[cfg(test)]
mod tests;
