use super::aabb::AABB;
use crate::collision::raycast::{RaycastInput, RaycastOutput};
use crate::math::{
    point::Point, rotation::Transform, vector::Vector, FloatNum, EPSILON,
};

/// A disc in local space: center point plus radius. Queries take a
/// [`Transform`] and localize on the fly; the shape itself never moves.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center_point: Point,
    radius: FloatNum,
}

impl<P: Into<Point>> From<(P, FloatNum)> for Circle {
    fn from((p, radius): (P, FloatNum)) -> Self {
        Self::new(p, radius)
    }
}

impl Circle {
    #[inline]
    pub fn new(center_point: impl Into<Point>, radius: FloatNum) -> Self {
        debug_assert!(radius >= 0.);
        Self {
            center_point: center_point.into(),
            radius,
        }
    }

    #[inline]
    pub fn radius(&self) -> FloatNum {
        self.radius
    }

    #[inline]
    pub fn center_point(&self) -> Point {
        self.center_point
    }

    /// The circle with its center mapped through `transform`; the radius is
    /// unaffected (transforms carry no scale).
    pub fn localize(&self, transform: &Transform) -> Self {
        Self {
            center_point: transform.apply(self.center_point),
            radius: self.radius,
        }
    }

    pub fn test_point(&self, transform: &Transform, point: impl Into<Point>) -> bool {
        let center = transform.apply(self.center_point);
        let delta: Vector = (center, point.into()).into();
        delta.length_squared() <= self.radius * self.radius
    }

    /// Bounding box under `transform`. Only the translation moves the box:
    /// rotating a disc about its own center changes nothing, and the local
    /// center offset is deliberately not rotated, matching the queries the
    /// animation layer was built against.
    pub fn compute_aabb(&self, transform: &Transform) -> AABB {
        let center = self.center_point + transform.translation();
        let rad: Vector = (self.radius, self.radius).into();
        AABB::new(center - rad, center + rad)
    }

    /// Quadratic ray/disc intersection; only the near root is ever
    /// reported. Degenerate rays (shorter than the kernel epsilon) miss.
    pub fn raycast(&self, transform: &Transform, input: &RaycastInput) -> Option<RaycastOutput> {
        let center = transform.apply(self.center_point);
        let start_to_center: Vector = (center, input.start()).into();
        let start_dist_sqr = start_to_center.length_squared() - self.radius * self.radius;

        let ray: Vector = (input.start(), input.end()).into();
        let b = start_to_center * ray;
        let ray_len_sqr = ray.length_squared();
        let sigma = b * b - ray_len_sqr * start_dist_sqr;

        if sigma < 0. || ray_len_sqr < EPSILON {
            return None;
        }

        let t = -(b + sigma.sqrt());
        if t < 0. || t > input.max_fraction() * ray_len_sqr {
            return None;
        }

        let fraction = t / ray_len_sqr;
        let normal = (start_to_center + ray * fraction).normalize();
        Some(RaycastOutput::new(normal, fraction))
    }
}
