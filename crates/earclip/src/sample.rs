//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angular order. No hull is taken:
//!   the ring stays star-shaped around the origin and usually concave.
//! - Angular jitter is capped so every gap stays below π; the origin is then
//!   strictly inside the kernel.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Used by the property tests, the benches and `earclip sample`.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::{point, Point};
use crate::ring::Polygon;
use crate::winding::YAxis;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49]
    /// and further for small `n` so that gaps stay below π.
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, `u∈[-radial_jitter, radial_jitter]`; clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 100.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a simple star-shaped polygon, counter-clockwise under y-up.
pub fn draw_star(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    Polygon::from_points(YAxis::Up, star_points(&cfg, &mut rng))
}

/// [`draw_star`] plus one regular-polygon hole centred on the origin.
///
/// The hole radius is half the distance from the origin to the nearest outer
/// edge, so the hole lies strictly inside.
pub fn draw_star_with_hole(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let outer = star_points(&cfg, &mut rng);
    let clearance = (0..outer.len())
        .map(|i| origin_distance(outer[i], outer[(i + 1) % outer.len()]))
        .fold(f64::INFINITY, f64::min);
    let m = (outer.len() / 2).clamp(3, 8);
    let phase = rng.gen::<f64>() * 2.0 * PI;
    let r = 0.5 * clearance;
    let hole = (0..m).map(|k| {
        let th = phase + (k as f64) * 2.0 * PI / (m as f64);
        point(th.cos() * r, th.sin() * r)
    });

    let mut poly = Polygon::from_points(YAxis::Up, outer);
    poly.add_hole(Polygon::from_points(YAxis::Up, hole));
    poly
}

fn star_points<R: Rng>(cfg: &StarCfg, rng: &mut R) -> Vec<Point> {
    let n = cfg.vertex_count.sample(rng);
    let nf = n as f64;
    // Largest gap is Δ(1 + 2·aj) < π.
    let aj = cfg
        .angle_jitter_frac
        .clamp(0.0, 0.49)
        .min(0.5 * (nf / 2.0 - 1.0) - 0.01)
        .max(0.0);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-6);
    let delta = 2.0 * PI / nf;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            point(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Distance from the origin to segment `ab`.
fn origin_distance(a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return a.norm();
    }
    let t = (-a.dot(&ab) / len2).clamp(0.0, 1.0);
    (a + ab * t).norm()
}
