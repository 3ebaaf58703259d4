use super::{point::Point, FloatNum, EPSILON};
use std::{
    fmt::Display,
    ops::{Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign},
};

/// A displacement in the plane. Positions are [`Point`]s; everything that
/// behaves like an offset, a direction or a normal is a `Vector`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub(crate) x: FloatNum,
    pub(crate) y: FloatNum,
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("{{ x: {}, y: {} }}", self.x, self.y))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl Vector {
    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.x
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.y
    }

    #[inline]
    pub fn to_point(&self) -> Point {
        (self.x, self.y).into()
    }

    /// Magnitude of the vector.
    #[inline]
    pub fn abs(&self) -> FloatNum {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn length_squared(&self) -> FloatNum {
        self.x * self.x + self.y * self.y
    }

    pub fn normalize(&self) -> Vector {
        let shrink = self.abs().recip();
        (self.x * shrink, self.y * shrink).into()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(&self, other: &Vector) -> Vector {
        (self.x.min(other.x), self.y.min(other.y)).into()
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(&self, other: &Vector) -> Vector {
        (self.x.max(other.x), self.y.max(other.y)).into()
    }

    #[inline]
    pub fn lerp(&self, other: &Vector, t: FloatNum) -> Vector {
        *self + (*other - self) * t
    }

    /// Perpendicular of `self` scaled by `s`: `(-y * s, x * s)`.
    ///
    /// The dual of the 2d cross product; with `s == 1` this is the
    /// counterclockwise perpendicular.
    #[inline]
    pub fn cross_scalar(&self, s: FloatNum) -> Vector {
        (-self.y * s, self.x * s).into()
    }
}

impl From<(FloatNum, FloatNum)> for Vector {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Self { x, y }
    }
}

impl From<[FloatNum; 2]> for Vector {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Self { x, y }
    }
}

/// The displacement from the first point to the second.
impl From<(Point, Point)> for Vector {
    fn from((p1, p2): (Point, Point)) -> Self {
        let x = p2.x() - p1.x();
        let y = p2.y() - p1.y();
        (x, y).into()
    }
}

impl From<(&Point, &Point)> for Vector {
    fn from((p1, p2): (&Point, &Point)) -> Self {
        (*p1, *p2).into()
    }
}

impl From<Vector> for (FloatNum, FloatNum) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

impl Add<Vector> for Vector {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        (self.x + rhs.x, self.y + rhs.y).into()
    }
}

impl Add<&Vector> for Vector {
    type Output = Self;
    fn add(self, rhs: &Vector) -> Self::Output {
        (self.x + rhs.x, self.y + rhs.y).into()
    }
}

impl AddAssign<Vector> for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vector> for Vector {
    type Output = Self;
    fn sub(self, rhs: Vector) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y).into()
    }
}

impl Sub<&Vector> for Vector {
    type Output = Self;
    fn sub(self, rhs: &Vector) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y).into()
    }
}

impl SubAssign<Vector> for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        (-self.x, -self.y).into()
    }
}

impl Mul<FloatNum> for Vector {
    type Output = Vector;
    fn mul(self, rhs: FloatNum) -> Self::Output {
        (self.x * rhs, self.y * rhs).into()
    }
}

impl MulAssign<FloatNum> for Vector {
    fn mul_assign(&mut self, rhs: FloatNum) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<FloatNum> for Vector {
    type Output = Vector;
    fn div(self, rhs: FloatNum) -> Self::Output {
        (self.x / rhs, self.y / rhs).into()
    }
}

impl DivAssign<FloatNum> for Vector {
    fn div_assign(&mut self, rhs: FloatNum) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

/// Dot product.
impl Mul<Vector> for Vector {
    type Output = FloatNum;
    fn mul(self, rhs: Vector) -> Self::Output {
        (self.x * rhs.x) + (self.y * rhs.y)
    }
}

/// 2d cross product: the signed area of the parallelogram formed by the two
/// vectors, equivalently the determinant of the 2x2 matrix they form.
impl BitXor<Vector> for Vector {
    type Output = FloatNum;
    fn bitxor(self, rhs: Vector) -> Self::Output {
        self.x * rhs.y - rhs.x * self.y
    }
}

/// Clockwise perpendicular: `(y, -x)`.
impl Not for Vector {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self {
            x: self.y,
            y: -self.x,
        }
    }
}
