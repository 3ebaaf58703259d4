pub mod aabb;
pub mod circle;
pub mod polygon;

pub(crate) mod utils;

pub use aabb::AABB;
pub use circle::Circle;
pub use polygon::{ConvexPolygon, MAX_VERTEX_COUNT};
