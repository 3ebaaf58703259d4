use crate::math::{point::Point, vector::Vector, FloatNum, EPSILON};

/// Area-weighted centroid of a convex polygon, computed as a triangle fan
/// anchored at the first vertex. Requires counterclockwise winding (positive
/// signed area); degenerate polygons are a programmer error.
pub(crate) fn compute_polygon_center_point(points: &[Point]) -> Point {
    debug_assert!(points.len() >= 3);

    let base = points[0];
    let mut weighted = Vector::default();
    let mut area: FloatNum = 0.;

    for index in 1..points.len() - 1 {
        let e1: Vector = (base, points[index]).into();
        let e2: Vector = (base, points[index + 1]).into();
        let tri_area = (e1 ^ e2) * 0.5;
        area += tri_area;
        weighted += (e1 + e2) * (tri_area / 3.);
    }

    debug_assert!(area > EPSILON);
    base + weighted / area
}

/// `[min, max]` interval of the points projected onto `vector`.
pub(crate) fn projection_interval(points: &[Point], vector: &Vector) -> (FloatNum, FloatNum) {
    points
        .iter()
        .fold((FloatNum::MAX, FloatNum::MIN), |(min, max), point| {
            let size = point.to_vector() * *vector;
            (size.min(min), size.max(max))
        })
}
