pub mod axis;
pub mod point;
pub mod rotation;
pub mod segment;
pub mod vector;

pub type FloatNum = f32;

/// Magnitudes below this are treated as zero by every query.
pub const EPSILON: FloatNum = 1e-5;
