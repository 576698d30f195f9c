//! Polygon JSON files.
//!
//! ```json
//! { "y_axis": "up", "outer": [[0,0],[10,0],[10,10],[0,10]], "holes": [[[4,4],[6,4],[5,6]]] }
//! ```
//!
//! `y_axis` defaults to `"up"`, `holes` to `[]`.

use anyhow::{Context, Result};
use earclip::{point, Polygon, YAxis};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSpec {
    #[default]
    Up,
    Down,
}

impl From<AxisSpec> for YAxis {
    fn from(a: AxisSpec) -> Self {
        match a {
            AxisSpec::Up => YAxis::Up,
            AxisSpec::Down => YAxis::Down,
        }
    }
}

impl From<YAxis> for AxisSpec {
    fn from(a: YAxis) -> Self {
        match a {
            YAxis::Up => AxisSpec::Up,
            YAxis::Down => AxisSpec::Down,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonSpec {
    #[serde(default)]
    pub y_axis: AxisSpec,
    pub outer: Vec<[f64; 2]>,
    #[serde(default)]
    pub holes: Vec<Vec<[f64; 2]>>,
}

impl PolygonSpec {
    /// Build the polygon; points coinciding with their predecessor are skipped.
    pub fn to_polygon(&self) -> Polygon {
        let y_axis = YAxis::from(self.y_axis);
        let mut poly = ring(y_axis, &self.outer, None);
        for (i, h) in self.holes.iter().enumerate() {
            poly.add_hole(ring(y_axis, h, Some(i)));
        }
        poly
    }

    pub fn from_polygon(poly: &Polygon) -> Self {
        let coords = |p: &Polygon| p.points().iter().map(|q| [q.x, q.y]).collect::<Vec<_>>();
        Self {
            y_axis: poly.y_axis().into(),
            outer: coords(poly),
            holes: poly.holes().iter().map(coords).collect(),
        }
    }
}

fn ring(y_axis: YAxis, coords: &[[f64; 2]], hole: Option<usize>) -> Polygon {
    let mut p = Polygon::new(y_axis);
    for &[x, y] in coords {
        if !p.add_point(point(x, y)) {
            tracing::warn!(x, y, hole = ?hole, "skipping duplicate neighbour point");
        }
    }
    p
}

pub fn load(path: &Path) -> Result<PolygonSpec> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing polygon JSON {}", path.display()))
}

pub fn save(spec: &PolygonSpec, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(spec)?)
        .with_context(|| format!("writing {}", path.display()))
}
