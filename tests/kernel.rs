use abies::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::TAU;

/// Random convex polygon: 3..=8 vertices on the unit circle, angles jittered
/// around regular spacing so the winding stays counterclockwise and the
/// shape never degenerates.
fn random_convex_polygon(rng: &mut StdRng) -> ConvexPolygon {
    let vertex_count = rng.gen_range(3..=8usize);
    let step = TAU / vertex_count as f32;

    let points: Vec<Point> = (0..vertex_count)
        .map(|index| {
            let angle = (index as f32 + rng.gen_range(-0.4..0.4)) * step;
            Point::new(angle.cos(), angle.sin())
        })
        .collect();

    ConvexPolygon::hull(&points)
}

fn random_transform(rng: &mut StdRng, span: f32) -> Transform {
    Transform::new(
        (rng.gen_range(-span..span), rng.gen_range(-span..span)),
        Rotation::new(rng.gen_range(0. ..TAU)),
    )
}

/// Point-in-convex test from raw vertices only, independent of the stored
/// normals: inside a counterclockwise polygon means to the left of (or on,
/// up to `margin`) every edge.
fn point_in_convex(point: Point, vertexes: &[Point], margin: f32) -> bool {
    (0..vertexes.len()).all(|index| {
        let edge: Vector = (vertexes[index], vertexes[(index + 1) % vertexes.len()]).into();
        let to_point: Vector = (vertexes[index], point).into();
        (edge ^ to_point) >= margin
    })
}

fn vertex_bounds(vertexes: &[Point]) -> (Point, Point) {
    vertexes[1..]
        .iter()
        .fold((vertexes[0], vertexes[0]), |(lower, upper), vertex| {
            (lower.min(vertex), upper.max(vertex))
        })
}

/// Brute-force overlap witness by grid sampling: some sample point lies
/// strictly inside both polygons.
fn sampled_overlap_witness(a: &ConvexPolygon, b: &ConvexPolygon) -> bool {
    let (lower_a, upper_a) = vertex_bounds(a.vertexes());
    let (lower_b, upper_b) = vertex_bounds(b.vertexes());
    let lower = lower_a.max(&lower_b);
    let upper = upper_a.min(&upper_b);
    if lower.x() > upper.x() || lower.y() > upper.y() {
        return false;
    }

    const STEPS: usize = 48;
    let dx = (upper.x() - lower.x()) / STEPS as f32;
    let dy = (upper.y() - lower.y()) / STEPS as f32;

    for i in 0..=STEPS {
        for j in 0..=STEPS {
            let point = Point::new(lower.x() + dx * i as f32, lower.y() + dy * j as f32);
            if point_in_convex(point, a.vertexes(), 1e-4)
                && point_in_convex(point, b.vertexes(), 1e-4)
            {
                return true;
            }
        }
    }
    false
}

#[test]
fn sat_agrees_with_point_sampling() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let a = random_convex_polygon(&mut rng);
        let b = random_convex_polygon(&mut rng);
        let transform_a = random_transform(&mut rng, 1.5);
        let transform_b = random_transform(&mut rng, 1.5);

        let local_a = a.localize(&transform_a);
        let local_b = b.localize(&transform_b);

        // A sampled interior witness is definite overlap; the converse is
        // left to the constructed-truth tests below, since sampling cannot
        // certify emptiness near edges.
        if sampled_overlap_witness(&local_a, &local_b) {
            assert!(
                polygon_intersects_polygon(&a, &transform_a, &b, &transform_b),
                "sampling found a common interior point but the axis test disagreed"
            );
        }
    }
}

#[test]
fn slightly_shifted_copies_always_overlap() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let polygon = random_convex_polygon(&mut rng);
        let base = random_transform(&mut rng, 10.);
        let angle = rng.gen_range(0. ..TAU);
        let nudge = Vector::new(angle.cos(), angle.sin()) * 0.05;
        let shifted = Transform::new(*base.translation() + nudge, *base.rotation());

        assert!(polygon_intersects_polygon(
            &polygon, &base, &polygon, &shifted
        ));
    }
}

#[test]
fn far_apart_copies_never_overlap() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let a = random_convex_polygon(&mut rng);
        let b = random_convex_polygon(&mut rng);
        let base = random_transform(&mut rng, 10.);
        // Both polygons fit in the unit circle, so any separation beyond
        // the two circumradii is a guaranteed miss.
        let angle = rng.gen_range(0. ..TAU);
        let offset = Vector::new(angle.cos(), angle.sin()) * 2.1;
        let apart = Transform::new(
            *base.translation() + offset,
            Rotation::new(rng.gen_range(0. ..TAU)),
        );

        assert!(!polygon_intersects_polygon(&a, &base, &b, &apart));
    }
}

#[test]
fn localize_composes() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..100 {
        let polygon = random_convex_polygon(&mut rng);
        let first = random_transform(&mut rng, 2.);
        let second = random_transform(&mut rng, 2.);

        let composed = Transform::new(
            *second.translation() + second.rotation().rotate(*first.translation()),
            Rotation::new(first.rotation().angle() + second.rotation().angle()),
        );

        let two_steps = polygon.localize(&first).localize(&second);
        let one_step = polygon.localize(&composed);

        assert_eq!(two_steps.center_point(), one_step.center_point());
        for index in 0..polygon.vertex_count() {
            assert_eq!(two_steps.vertexes()[index], one_step.vertexes()[index]);
            assert_eq!(two_steps.normals()[index], one_step.normals()[index]);
        }
    }
}

#[test]
fn circle_straddling_any_edge_overlaps() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..100 {
        let polygon = random_convex_polygon(&mut rng);
        let polygon_transform = random_transform(&mut rng, 3.);
        let local = polygon.localize(&polygon_transform);

        let index = rng.gen_range(0..local.vertex_count());
        let start = local.vertexes()[index];
        let end = local.vertexes()[(index + 1) % local.vertex_count()];
        let edge: Vector = (start, end).into();
        let midpoint = start + edge * 0.5;

        // Small enough that the edge endpoints stay outside the circle.
        let circle = Circle::new(midpoint, edge.abs() * 0.4);
        assert!(circle_intersects_polygon(
            &circle,
            &Transform::identity(),
            &polygon,
            &polygon_transform
        ));
    }
}

#[test]
fn degenerate_rays_never_hit_any_shape() {
    let mut rng = StdRng::seed_from_u64(47);

    for _ in 0..50 {
        let origin = Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let input = RaycastInput::segment(origin, origin);

        let aabb = AABB::from_center_extents((0., 0.), (2., 2.));
        assert!(aabb.raycast(&input).is_none());

        let circle = Circle::new((0., 0.), 2.);
        assert!(circle.raycast(&Transform::identity(), &input).is_none());

        let polygon = ConvexPolygon::axis_aligned((2., 2.));
        assert!(polygon.raycast(&Transform::identity(), &input).is_none());
    }
}

// Vertex sets fed in the same shape the tooling layer hands them over:
// plain JSON arrays of [x, y] pairs, convex and counterclockwise.
const HULL_FIXTURES: &str = r#"[
    [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]],
    [[2.0, 0.0], [3.0, 1.0], [2.5, 2.5], [1.5, 2.5], [1.0, 1.0]],
    [[-4.0, 0.0], [-3.0, -1.5], [-1.5, -1.5], [-0.5, 0.0], [-1.5, 1.5], [-3.0, 1.5]],
    [[0.0, -2.0], [1.5, -1.5], [2.0, 0.0], [1.5, 1.5], [0.0, 2.0], [-1.5, 1.5], [-2.0, 0.0], [-1.5, -1.5]]
]"#;

#[test]
fn fixture_hulls_are_well_formed() {
    let sets: Vec<Vec<[f32; 2]>> = serde_json::from_str(HULL_FIXTURES).unwrap();

    for set in sets {
        let points: Vec<Point> = set.into_iter().map(Point::from).collect();
        let polygon = ConvexPolygon::hull(&points);
        assert_eq!(polygon.vertex_count(), points.len());

        let identity = Transform::identity();
        assert!(polygon.test_point(&identity, polygon.center_point()));

        for normal in polygon.normals() {
            assert!((normal.abs() - 1.).abs() < 1e-5);
        }

        assert!(polygon_intersects_polygon(
            &polygon, &identity, &polygon, &identity
        ));
        assert!(polygon.compute_aabb(&identity).is_valid());
    }
}
