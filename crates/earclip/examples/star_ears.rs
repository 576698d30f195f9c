//! Print ear records for one sampled star polygon.
//!
//! Usage:
//!   cargo run -p earclip --example star_ears -- 16
//!   cargo run -p earclip --example star_ears -- 16 hole
//!
//! The first argument is the vertex count (default 12); `hole` adds a hole.

use earclip::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let with_hole = args.next().as_deref() == Some("hole");
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    let tok = ReplayToken { seed: 2025, index: 0 };
    let poly = if with_hole {
        draw_star_with_hole(cfg, tok)
    } else {
        draw_star(cfg, tok)
    };
    match triangulate(&poly) {
        Ok(t) => {
            eprintln!(
                "points={} holes={} triangles={} area={:.3}",
                poly.point_count(),
                poly.hole_count(),
                t.triangle_count(),
                t.area()
            );
            print!("{}", to_records_string(&t));
        }
        Err(e) => eprintln!("triangulation failed: {e}"),
    }
}
