use proptest::prelude::*;

use super::prelude::*;
use crate::predicates::is_convex_vertex;

fn poly(y_axis: YAxis, pts: &[(f64, f64)]) -> Polygon {
    Polygon::from_points(y_axis, pts.iter().map(|&(x, y)| point(x, y)))
}

const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
const L_SHAPE: [(f64, f64); 6] = [
    (0.0, 0.0),
    (10.0, 0.0),
    (10.0, 5.0),
    (5.0, 5.0),
    (5.0, 10.0),
    (0.0, 10.0),
];
const TRI_HOLE: [(f64, f64); 3] = [(4.0, 4.0), (6.0, 4.0), (5.0, 6.0)];

fn mirrored(pts: &[(f64, f64)]) -> Vec<(f64, f64)> {
    pts.iter().map(|&(x, y)| (x, -y)).collect()
}

#[test]
fn square_triangulates_into_two_halves() {
    let t = triangulate(&poly(YAxis::Up, &SQUARE)).unwrap();
    assert_eq!(t.triangle_count(), 2);
    assert_eq!(t.indices().len(), 6);
    assert_eq!(t.vertices().len(), 4);
    for [a, b, c] in t.triangles() {
        assert!((crate::predicates::triangle_area(a, b, c) - 50.0).abs() < 1e-12);
    }
}

#[test]
fn l_shape_clips_concave_corner_only_once_convex() {
    let t = triangulate(&poly(YAxis::Up, &L_SHAPE)).unwrap();
    assert_eq!(t.triangle_count(), 4);
    assert!((t.area() - 75.0).abs() < 1e-9);
    for [a, b, c] in t.triangles() {
        assert!(is_convex_vertex(a, b, c, YAxis::Up));
    }
}

#[test]
fn square_with_triangular_hole() {
    let mut p = poly(YAxis::Up, &SQUARE);
    p.add_hole(poly(YAxis::Up, &TRI_HOLE));

    let mut merged = p.clone();
    merge_holes(&mut merged).unwrap();
    assert_eq!(merged.point_count(), 9);
    assert_eq!(merged.hole_count(), 0);

    let t = p.triangulate().unwrap();
    assert_eq!(t.triangle_count(), 7);
    assert!((t.area() - 98.0).abs() < 1e-9);
    // Bridge copies collapse onto one vertex each.
    assert_eq!(t.vertices().len(), 7);
    // The caller's polygon still owns its hole.
    assert_eq!(p.hole_count(), 1);
}

#[test]
fn hole_on_boundary_fails_without_corruption() {
    let mut p = poly(YAxis::Up, &SQUARE);
    p.add_hole(poly(YAxis::Up, &[(4.0, 0.0), (6.0, 4.0), (5.0, 6.0)]));
    let err = triangulate(&p).unwrap_err();
    assert!(matches!(err, EarClipError::PointOutsideParent { hole: 0, .. }));

    let before = p.points().to_vec();
    assert!(merge_holes(&mut p).is_err());
    assert_eq!(p.points(), before.as_slice());
    assert_eq!(p.hole_count(), 1);
}

#[test]
fn too_small_polygon_is_invalid() {
    let p = poly(YAxis::Up, &[(0.0, 0.0), (1.0, 0.0)]);
    assert!(matches!(
        triangulate(&p),
        Err(EarClipError::InvalidPolygon { count: 2, hole: None })
    ));
    assert!(triangulate(&Polygon::new(YAxis::Up)).is_err());
}

#[test]
fn y_down_mirror_gives_same_triangulation() {
    for pts in [&SQUARE[..], &L_SHAPE[..]] {
        let up = triangulate(&poly(YAxis::Up, pts)).unwrap();
        let down = triangulate(&poly(YAxis::Down, &mirrored(pts))).unwrap();
        assert_eq!(up.triangle_count(), down.triangle_count());
        assert!((up.area() - down.area()).abs() < 1e-9);
    }

    let mut up = poly(YAxis::Up, &SQUARE);
    up.add_hole(poly(YAxis::Up, &TRI_HOLE));
    let mut down = poly(YAxis::Down, &mirrored(&SQUARE));
    down.add_hole(poly(YAxis::Down, &mirrored(&TRI_HOLE)));
    let (tu, td) = (up.triangulate().unwrap(), down.triangulate().unwrap());
    assert_eq!(tu.triangle_count(), 7);
    assert_eq!(td.triangle_count(), 7);
    assert!((td.area() - 98.0).abs() < 1e-9);
}

#[test]
fn records_of_a_triangulation_parse_back() {
    let mut p = poly(YAxis::Up, &SQUARE);
    p.add_hole(poly(YAxis::Up, &TRI_HOLE));
    let t = p.triangulate().unwrap();
    let text = to_records_string(&t);
    assert!(text.starts_with("7\n"));
    let back = parse_records(&text).unwrap();
    assert_eq!(back, t.triangles().collect::<Vec<_>>());
}

const JAGGED: [(f64, f64); 21] = [
    (97.0, 103.0),
    (33.0, 69.0),
    (25.0, 118.0),
    (-12.0, 103.0),
    (-28.0, 60.0),
    (-35.0, 38.0),
    (-104.0, 51.0),
    (-79.0, 13.0),
    (-117.0, -17.0),
    (-137.0, -47.0),
    (-100.0, -80.0),
    (-52.0, -73.0),
    (-22.0, -89.0),
    (3.0, -103.0),
    (21.0, -58.0),
    (87.0, -110.0),
    (78.0, -73.0),
    (93.0, -35.0),
    (139.0, -9.0),
    (92.0, 29.0),
    (79.0, 41.0),
];

/// Axis-aligned square with its lower-left corner at `(x, y)`.
fn square_hole(x: f64, y: f64, side: f64) -> Polygon {
    poly(
        YAxis::Up,
        &[(x, y), (x + side, y), (x + side, y + side), (x, y + side)],
    )
}

#[test]
fn hole_level_with_a_sibling_corner_triangulates() {
    // The right hole's anchor (-72,4) is level with the left hole's top edge.
    let mut p = poly(YAxis::Up, &JAGGED);
    p.add_hole(square_hole(-72.0, 4.0, 5.0));
    p.add_hole(square_hole(-81.0, -2.0, 6.0));
    let t = p.triangulate().unwrap();
    assert_eq!(t.triangle_count(), 21 + 2 * (4 + 2) - 2);
    assert!((t.area() - 31953.0).abs() < 1e-6);
    assert!((t.area() - (p.area() - 25.0 - 36.0)).abs() < 1e-6);
}

/// 2 to 6 disjoint integer squares `(x, y, side)`, one per cell of a
/// `cols x cols` grid of `cell`-wide cells starting at `(origin, origin)`.
fn grid_holes(cols: usize, cell: u32, origin: i32, max_side: u32) -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    (
        prop::sample::subsequence((0..cols * cols).collect::<Vec<_>>(), 2..=6),
        prop::collection::vec((2..=max_side, any::<u32>(), any::<u32>()), 6),
    )
        .prop_map(move |(cells, dims)| {
            cells
                .into_iter()
                .zip(dims)
                .map(|(c, (side, fx, fy))| {
                    let room = cell - 2 - side;
                    let x = origin + ((c % cols) as u32 * cell + 1 + fx % room) as i32;
                    let y = origin + ((c / cols) as u32 * cell + 1 + fy % room) as i32;
                    (x as f64, y as f64, side as f64)
                })
                .collect()
        })
}

/// Integer star: `radii.len()` equally spaced rays, rounded to the grid.
fn integer_star(radii: &[u32]) -> Polygon {
    let n = radii.len() as f64;
    let pts: Vec<(f64, f64)> = radii
        .iter()
        .enumerate()
        .map(|(k, &r)| {
            let th = 2.0 * std::f64::consts::PI * k as f64 / n;
            ((r as f64 * th.cos()).round(), (r as f64 * th.sin()).round())
        })
        .collect();
    poly(YAxis::Up, &pts)
}

fn check_holes_triangulate(mut p: Polygon, holes: &[(f64, f64, f64)]) -> Result<(), TestCaseError> {
    for &(x, y, side) in holes {
        p.add_hole(square_hole(x, y, side));
    }
    let h = holes.len();
    let n_total = p.point_count() + 4 * h;
    let expected = p.area() - holes.iter().map(|&(_, _, s)| s * s).sum::<f64>();
    let t = triangulate(&p).unwrap();
    prop_assert_eq!(t.triangle_count(), n_total + 2 * h - 2);
    prop_assert!(close(t.area(), expected));
    Ok(())
}

fn star(seed: u64, index: u64, n: usize) -> Polygon {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    draw_star(cfg, ReplayToken { seed, index })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn star_gives_n_minus_two_ears_covering_its_area(seed in any::<u64>(), index in 0u64..1000, n in 3usize..48) {
        let p = star(seed, index, n);
        let t = triangulate(&p).unwrap();
        prop_assert_eq!(t.triangle_count(), n - 2);
        prop_assert!(close(t.area(), p.area()));
        // Vertex set equals the input point set.
        prop_assert_eq!(t.vertices().len(), n);
        for q in p.points() {
            prop_assert!(t.vertices().iter().any(|v| v == q));
        }
    }

    #[test]
    fn star_with_hole_area_excludes_the_hole(seed in any::<u64>(), index in 0u64..1000, n in 6usize..40) {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            ..StarCfg::default()
        };
        let p = draw_star_with_hole(cfg, ReplayToken { seed, index });
        let hole = p.hole(0).unwrap();
        let m = hole.point_count();
        let t = triangulate(&p).unwrap();
        prop_assert_eq!(t.triangle_count(), n + m + 2 - 2);
        prop_assert!(close(t.area(), p.area() - hole.area()));
    }

    #[test]
    fn square_with_grid_holes_triangulates(holes in grid_holes(6, 20, 0, 15)) {
        let p = poly(YAxis::Up, &[(0.0, 0.0), (120.0, 0.0), (120.0, 120.0), (0.0, 120.0)]);
        check_holes_triangulate(p, &holes)?;
    }

    #[test]
    fn integer_star_with_grid_holes_triangulates(
        radii in prop::collection::vec(90u32..=140, 12..=24),
        holes in grid_holes(3, 30, -45, 12),
    ) {
        check_holes_triangulate(integer_star(&radii), &holes)?;
    }

    #[test]
    fn orientate_is_idempotent(seed in any::<u64>(), n in 3usize..32, reverse in any::<bool>()) {
        let mut p = star(seed, 0, n);
        if reverse {
            p = Polygon::from_points(YAxis::Up, p.points().iter().rev().copied());
        }
        p.orientate();
        let once = p.points().to_vec();
        prop_assert!(!p.orientate());
        prop_assert_eq!(p.points(), once.as_slice());
        prop_assert_eq!(p.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn contains_point_ignores_start_and_orientation(
        seed in any::<u64>(),
        n in 3usize..24,
        shift in 0usize..24,
        qx in -200.0f64..200.0,
        qy in -200.0f64..200.0,
    ) {
        let p = star(seed, 1, n);
        let q = point(qx, qy);
        let expected = p.contains_point(q);

        let k = shift % n;
        let rotated = Polygon::from_points(
            YAxis::Up,
            p.points()[k..].iter().chain(&p.points()[..k]).copied(),
        );
        prop_assert_eq!(rotated.contains_point(q), expected);

        let mut reversed = Polygon::from_points(YAxis::Up, p.points().iter().rev().copied());
        prop_assert_eq!(reversed.contains_point(q), expected);
        reversed.orientate();
        prop_assert_eq!(reversed.contains_point(q), expected);
    }

    #[test]
    fn y_down_mirror_matches(seed in any::<u64>(), n in 3usize..32) {
        let up = star(seed, 2, n);
        let down = Polygon::from_points(YAxis::Down, up.points().iter().map(|q| point(q.x, -q.y)));
        let tu = triangulate(&up).unwrap();
        let td = triangulate(&down).unwrap();
        prop_assert_eq!(tu.triangle_count(), td.triangle_count());
        prop_assert!(close(tu.area(), td.area()));
    }

    #[test]
    fn records_round_trip_truncated(seed in any::<u64>(), n in 3usize..32) {
        let t = triangulate(&star(seed, 3, n)).unwrap();
        let back = parse_records(&to_records_string(&t)).unwrap();
        let expected: Vec<[Point; 3]> = t
            .triangles()
            .map(|tri| tri.map(|q| point(q.x.trunc(), q.y.trunc())))
            .collect();
        prop_assert_eq!(back, expected);
    }
}
