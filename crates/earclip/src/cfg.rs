//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants shared by every module so that point
//!   equality, ring lookup and vertex deduplication always agree.
//! - Inputs are expected at "pixel" to "millimetre" scales (tens to thousands
//!   of units); extreme scalings should be normalized by the caller.

/// Per-axis tolerance under which two points are considered the same point.
pub const POINT_EPS: f64 = 1e-9;
/// Relative tolerance for degenerate (collinear) triangles in barycentric tests.
pub const COLLINEAR_EPS: f64 = 1e-12;
/// Tolerance on segment parameters `t, u` when classifying endpoint touches.
pub const PARAM_EPS: f64 = 1e-12;
