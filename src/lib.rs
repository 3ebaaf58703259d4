pub mod collision;
pub mod math;
pub mod shape;

pub mod prelude {
    pub use super::collision::{
        circle_intersects_circle, circle_intersects_polygon, polygon_intersects_circle,
        polygon_intersects_polygon, RaycastInput, RaycastOutput,
    };
    pub use super::math::{
        point::Point,
        rotation::{Rotation, Transform},
        vector::Vector,
        FloatNum,
    };
    pub use super::shape::{aabb::AABB, circle::Circle, polygon::ConvexPolygon};
}
