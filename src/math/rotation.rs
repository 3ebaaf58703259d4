use super::{point::Point, vector::Vector, FloatNum};

/// A 2d rotation stored as the unit pair `(cos θ, sin θ)`.
///
/// Built once from an angle, then applied many times without touching the
/// trigonometric functions again.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    cos: FloatNum,
    sin: FloatNum,
}

impl Rotation {
    #[inline]
    pub fn new(rad: FloatNum) -> Self {
        Self {
            cos: rad.cos(),
            sin: rad.sin(),
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self { cos: 1., sin: 0. }
    }

    #[inline]
    pub fn cos(&self) -> FloatNum {
        self.cos
    }

    #[inline]
    pub fn sin(&self) -> FloatNum {
        self.sin
    }

    #[inline]
    pub fn angle(&self) -> FloatNum {
        self.sin.atan2(self.cos)
    }

    /// Image of the x axis under this rotation.
    #[inline]
    pub fn axis_x(&self) -> Vector {
        (self.cos, self.sin).into()
    }

    /// Image of the y axis under this rotation.
    #[inline]
    pub fn axis_y(&self) -> Vector {
        (-self.sin, self.cos).into()
    }

    #[inline]
    pub fn rotate(&self, v: Vector) -> Vector {
        (
            self.cos * v.x() - self.sin * v.y(),
            self.sin * v.x() + self.cos * v.y(),
        )
            .into()
    }

    #[inline]
    pub fn rotate_inv(&self, v: Vector) -> Vector {
        (
            self.cos * v.x() + self.sin * v.y(),
            -self.sin * v.x() + self.cos * v.y(),
        )
            .into()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<FloatNum> for Rotation {
    fn from(rad: FloatNum) -> Self {
        Self::new(rad)
    }
}

/// A rigid transform: rotation followed by translation, mapping local
/// coordinates to world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vector,
    rotation: Rotation,
}

impl Transform {
    pub fn new(translation: impl Into<Vector>, rotation: impl Into<Rotation>) -> Self {
        Self {
            translation: translation.into(),
            rotation: rotation.into(),
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self {
            translation: Vector::new(0., 0.),
            rotation: Rotation::identity(),
        }
    }

    #[inline]
    pub fn translation(&self) -> &Vector {
        &self.translation
    }

    #[inline]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Maps a local-space point into world space.
    #[inline]
    pub fn apply(&self, point: Point) -> Point {
        (self.rotation.rotate(point.to_vector()) + self.translation).to_point()
    }

    /// Maps a world-space point back into local space.
    #[inline]
    pub fn apply_inverse(&self, point: Point) -> Point {
        self.rotation
            .rotate_inv(point.to_vector() - self.translation)
            .to_point()
    }
}
