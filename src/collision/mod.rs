//! Pairwise boolean overlap queries between localized shapes.
//!
//! Every query takes the shapes in local space together with their
//! transforms and localizes internally; nothing is mutated or retained.

pub mod raycast;

pub use raycast::{RaycastInput, RaycastOutput};

use crate::math::rotation::Transform;
use crate::shape::{circle::Circle, polygon::ConvexPolygon, utils::projection_interval};

/// Two discs overlap when their centers are within the sum of the radii.
pub fn circle_intersects_circle(
    a: &Circle,
    transform_a: &Transform,
    b: &Circle,
    transform_b: &Transform,
) -> bool {
    let center_a = transform_a.apply(a.center_point());
    let center_b = transform_b.apply(b.center_point());
    let delta: crate::math::vector::Vector = (center_a, center_b).into();
    let radius_sum = a.radius() + b.radius();
    delta.length_squared() <= radius_sum * radius_sum
}

/// Edge-raycast heuristic: the circle is raycast against every edge of the
/// localized polygon, and any hit counts as overlap.
///
/// Reports no overlap when the circle lies fully inside the polygon without
/// touching an edge. Downstream effect logic was tuned against that
/// behavior, so it stays.
pub fn circle_intersects_polygon(
    circle: &Circle,
    circle_transform: &Transform,
    polygon: &ConvexPolygon,
    polygon_transform: &Transform,
) -> bool {
    let local_polygon = polygon.localize(polygon_transform);

    let hit = local_polygon.edge_iter().any(|edge| {
        let input = RaycastInput::segment(*edge.start_point(), *edge.end_point());
        circle.raycast(circle_transform, &input).is_some()
    });
    hit
}

pub fn polygon_intersects_circle(
    polygon: &ConvexPolygon,
    polygon_transform: &Transform,
    circle: &Circle,
    circle_transform: &Transform,
) -> bool {
    circle_intersects_polygon(circle, circle_transform, polygon, polygon_transform)
}

/// Full separating-axis test over the face normals of both polygons: the
/// pair overlaps exactly when no tested axis separates the two projection
/// intervals. Touching intervals count as overlap.
pub fn polygon_intersects_polygon(
    a: &ConvexPolygon,
    transform_a: &Transform,
    b: &ConvexPolygon,
    transform_b: &Transform,
) -> bool {
    let local_a = a.localize(transform_a);
    let local_b = b.localize(transform_b);

    for normal in local_a.normals().iter().chain(local_b.normals()) {
        let (min_a, max_a) = projection_interval(local_a.vertexes(), normal);
        let (min_b, max_b) = projection_interval(local_b.vertexes(), normal);

        let interval_distance = if min_a < min_b {
            min_b - max_a
        } else {
            min_a - max_b
        };
        if interval_distance > 0. {
            return false;
        }
    }

    true
}
