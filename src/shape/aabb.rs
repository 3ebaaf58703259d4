use crate::collision::raycast::{RaycastInput, RaycastOutput};
use crate::math::{axis::AxisDirection, point::Point, vector::Vector, FloatNum, EPSILON};

/// An axis-aligned bounding box, defined by its componentwise min/max
/// corners. Valid when both extents are non-negative and both corners are
/// finite.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AABB {
    min_bound: Point,
    max_bound: Point,
}

impl AABB {
    #[inline]
    pub fn new(min_bound: impl Into<Point>, max_bound: impl Into<Point>) -> Self {
        Self {
            min_bound: min_bound.into(),
            max_bound: max_bound.into(),
        }
    }

    /// Box spanning `center ± extents`, where `extents` are half-sizes.
    pub fn from_center_extents(center: impl Into<Point>, extents: impl Into<Vector>) -> Self {
        let center = center.into();
        let extents = extents.into();
        Self {
            min_bound: center - extents,
            max_bound: center + extents,
        }
    }

    #[inline]
    pub fn min_bound(&self) -> Point {
        self.min_bound
    }

    #[inline]
    pub fn max_bound(&self) -> Point {
        self.max_bound
    }

    /// Expands the box just enough to include `point`.
    pub fn envelop(&self, point: impl Into<Point>) -> Self {
        let point = point.into();
        Self {
            min_bound: self.min_bound.min(&point),
            max_bound: self.max_bound.max(&point),
        }
    }

    /// Grows (or shrinks, for negative components) both corners by
    /// `half_adjust` on each axis.
    pub fn inflate(&self, half_adjust: impl Into<Vector>) -> Self {
        let half_adjust = half_adjust.into();
        Self {
            min_bound: self.min_bound - half_adjust,
            max_bound: self.max_bound + half_adjust,
        }
    }

    pub fn translate(&self, translation: &Vector) -> Self {
        Self {
            min_bound: self.min_bound + translation,
            max_bound: self.max_bound + translation,
        }
    }

    pub fn is_valid(&self) -> bool {
        let size: Vector = (self.min_bound, self.max_bound).into();
        size.x() >= 0. && size.y() >= 0. && self.min_bound.is_finite() && self.max_bound.is_finite()
    }

    pub fn center(&self) -> Point {
        ((self.min_bound.to_vector() + self.max_bound.to_vector()) * 0.5).to_point()
    }

    /// Half-sizes of the box.
    pub fn extents(&self) -> Vector {
        Vector::from((self.min_bound, self.max_bound)) * 0.5
    }

    pub fn perimeter(&self) -> FloatNum {
        let size: Vector = (self.min_bound, self.max_bound).into();
        2. * (size.x() + size.y())
    }

    /// The smallest box containing both `self` and `other`.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            min_bound: self.min_bound.min(&other.min_bound),
            max_bound: self.max_bound.max(&other.max_bound),
        }
    }

    /// True when `other` lies entirely within `self` on both axes.
    pub fn contains(&self, other: &Self) -> bool {
        self.min_bound.x() <= other.min_bound.x()
            && self.min_bound.y() <= other.min_bound.y()
            && self.max_bound.x() >= other.max_bound.x()
            && self.max_bound.y() >= other.max_bound.y()
    }

    /// Separating-axis test on the two coordinate axes; touching boxes
    /// count as overlapping.
    pub fn test_overlap(&self, other: &Self) -> bool {
        let d1: Vector = (self.max_bound, other.min_bound).into();
        let d2: Vector = (other.max_bound, self.min_bound).into();
        d1.x() <= 0. && d1.y() <= 0. && d2.x() <= 0. && d2.y() <= 0.
    }

    /// Slab raycast. The hit normal is the face of whichever axis entered
    /// last; rays parallel to a slab must already lie inside it.
    pub fn raycast(&self, input: &RaycastInput) -> Option<RaycastOutput> {
        let mut t_min = FloatNum::NEG_INFINITY;
        let mut t_max = FloatNum::INFINITY;
        let mut normal = Vector::default();

        let point = input.start();
        let dir: Vector = (input.start(), input.end()).into();

        for axis in [AxisDirection::X, AxisDirection::Y] {
            let (origin, dir_component, lower, upper) = match axis {
                AxisDirection::X => (point.x(), dir.x(), self.min_bound.x(), self.max_bound.x()),
                AxisDirection::Y => (point.y(), dir.y(), self.min_bound.y(), self.max_bound.y()),
            };

            if dir_component.abs() < EPSILON {
                if origin < lower || origin > upper {
                    return None;
                }
                continue;
            }

            let inv = dir_component.recip();
            let mut t1 = (lower - origin) * inv;
            let mut t2 = (upper - origin) * inv;
            let mut sign = -1.;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
                sign = 1.;
            }

            if t1 > t_min {
                t_min = t1;
                normal = Vector::from(axis) * sign;
            }

            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }

        if t_min < 0. || input.max_fraction() < t_min {
            return None;
        }

        Some(RaycastOutput::new(normal, t_min))
    }
}
