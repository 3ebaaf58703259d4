use crate::math::{point::Point, vector::Vector, FloatNum};

/// A directed segment to cast against a shape, from `start` towards `end`.
///
/// `max_fraction` bounds how far along the segment a hit may be reported,
/// as a fraction in `(0, 1]` of the full `start -> end` span.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaycastInput {
    start: Point,
    end: Point,
    max_fraction: FloatNum,
}

impl RaycastInput {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>, max_fraction: FloatNum) -> Self {
        debug_assert!(max_fraction > 0. && max_fraction <= 1.);
        Self {
            start: start.into(),
            end: end.into(),
            max_fraction,
        }
    }

    /// The full segment, hits allowed anywhere along it.
    pub fn segment(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self::new(start, end, 1.)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn max_fraction(&self) -> FloatNum {
        self.max_fraction
    }
}

/// A reported hit: the surface normal at the hit point (world space) and the
/// fraction along the ray at which it occurred, in `[0, max_fraction]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaycastOutput {
    normal: Vector,
    fraction: FloatNum,
}

impl RaycastOutput {
    pub fn new(normal: Vector, fraction: FloatNum) -> Self {
        Self { normal, fraction }
    }

    #[inline]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    #[inline]
    pub fn fraction(&self) -> FloatNum {
        self.fraction
    }
}
