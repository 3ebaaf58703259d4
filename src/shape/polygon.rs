use super::aabb::AABB;
use super::utils::compute_polygon_center_point;
use crate::collision::raycast::{RaycastInput, RaycastOutput};
use crate::math::{
    point::Point,
    rotation::{Rotation, Transform},
    segment::Segment,
    vector::Vector,
    FloatNum,
};

/// Vertex capacity of [`ConvexPolygon`].
pub const MAX_VERTEX_COUNT: usize = 8;

/// A convex polygon with at most [`MAX_VERTEX_COUNT`] vertices, stored in
/// fixed arrays so that shapes stay plain stack values.
///
/// `normals[i]` is the outward unit normal of the edge from `vertexes[i]` to
/// `vertexes[(i + 1) % vertex_count]`; vertices wind counterclockwise.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexPolygon {
    vertexes: [Point; MAX_VERTEX_COUNT],
    normals: [Vector; MAX_VERTEX_COUNT],
    vertex_count: usize,
    center_point: Point,
}

impl ConvexPolygon {
    /// Axis-aligned rectangle spanning `±half_size`, centroid at the origin.
    /// Face normals come out in the fixed order bottom, right, top, left.
    pub fn axis_aligned(half_size: impl Into<Vector>) -> Self {
        let half_size = half_size.into();
        let (hx, hy) = half_size.into();

        let mut vertexes = [Point::default(); MAX_VERTEX_COUNT];
        let mut normals = [Vector::default(); MAX_VERTEX_COUNT];

        vertexes[0] = (-hx, -hy).into();
        vertexes[1] = (hx, -hy).into();
        vertexes[2] = (hx, hy).into();
        vertexes[3] = (-hx, hy).into();
        normals[0] = (0., -1.).into();
        normals[1] = (1., 0.).into();
        normals[2] = (0., 1.).into();
        normals[3] = (-1., 0.).into();

        Self {
            vertexes,
            normals,
            vertex_count: 4,
            center_point: (0., 0.).into(),
        }
    }

    /// Rectangle with the given half-sizes, rotated by `angle` and placed at
    /// `center`. The box transform is applied to vertices and normals alike.
    pub fn oriented_box(
        half_size: impl Into<Vector>,
        center: impl Into<Point>,
        angle: FloatNum,
    ) -> Self {
        let center = center.into();
        let mut polygon = Self::axis_aligned(half_size);
        polygon.center_point = center;

        let transform = Transform::new(center.to_vector(), Rotation::new(angle));
        for index in 0..polygon.vertex_count {
            polygon.vertexes[index] = transform.apply(polygon.vertexes[index]);
            polygon.normals[index] = transform.apply(polygon.normals[index].to_point()).to_vector();
        }

        polygon
    }

    /// Builds a polygon from 3..=[`MAX_VERTEX_COUNT`] points that already
    /// form a convex, counterclockwise-wound hull — no hull computation is
    /// performed here, the caller guarantees the winding. Extra points are
    /// dropped.
    pub fn hull(points: &[Point]) -> Self {
        debug_assert!(points.len() >= 3);

        let vertex_count = points.len().min(MAX_VERTEX_COUNT);
        let mut vertexes = [Point::default(); MAX_VERTEX_COUNT];
        vertexes[..vertex_count].copy_from_slice(&points[..vertex_count]);

        let center_point = compute_polygon_center_point(&vertexes[..vertex_count]);

        let mut normals = [Vector::default(); MAX_VERTEX_COUNT];
        for index in 0..vertex_count {
            let edge: Vector = (vertexes[index], vertexes[(index + 1) % vertex_count]).into();
            // Clockwise perpendicular of a counterclockwise edge points out.
            normals[index] = (!edge).normalize();
        }

        Self {
            vertexes,
            normals,
            vertex_count,
            center_point,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn vertexes(&self) -> &[Point] {
        &self.vertexes[..self.vertex_count]
    }

    #[inline]
    pub fn normals(&self) -> &[Vector] {
        &self.normals[..self.vertex_count]
    }

    #[inline]
    pub fn center_point(&self) -> Point {
        self.center_point
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.vertex_count).map(|index| {
            (
                self.vertexes[index],
                self.vertexes[(index + 1) % self.vertex_count],
            )
                .into()
        })
    }

    /// The polygon with every vertex and the centroid mapped through
    /// `transform`; normals are rotated only.
    pub fn localize(&self, transform: &Transform) -> Self {
        let mut out = *self;
        out.center_point = transform.apply(self.center_point);
        for index in 0..self.vertex_count {
            out.normals[index] = transform.rotation().rotate(self.normals[index]);
            out.vertexes[index] = transform.apply(self.vertexes[index]);
        }
        out
    }

    /// Half-plane containment: the point is inside when it sits behind
    /// every edge.
    pub fn test_point(&self, transform: &Transform, point: impl Into<Point>) -> bool {
        let local_point = transform.apply_inverse(point.into());
        self.vertexes()
            .iter()
            .zip(self.normals())
            .all(|(vertex, normal)| {
                let delta: Vector = (*vertex, local_point).into();
                *normal * delta <= 0.
            })
    }

    /// Componentwise min/max over the transformed vertices.
    pub fn compute_aabb(&self, transform: &Transform) -> AABB {
        let first = transform.apply(self.vertexes[0]);
        let (lower, upper) = self.vertexes()[1..]
            .iter()
            .fold((first, first), |(lower, upper), vertex| {
                let vertex = transform.apply(*vertex);
                (lower.min(&vertex), upper.max(&vertex))
            });
        AABB::new(lower, upper)
    }

    /// Half-plane clipping raycast: every edge either tightens the entry
    /// fraction (faces the ray) or the exit fraction (faces away); an empty
    /// interval means a miss, and a ray starting inside reports no hit.
    pub fn raycast(&self, transform: &Transform, input: &RaycastInput) -> Option<RaycastOutput> {
        let p0 = transform.apply_inverse(input.start());
        let p1 = transform.apply_inverse(input.end());
        let delta: Vector = (p0, p1).into();

        let mut lower: FloatNum = 0.;
        let mut upper = input.max_fraction();
        let mut hit_index = None;

        for index in 0..self.vertex_count {
            let to_vertex: Vector = (p0, self.vertexes[index]).into();
            let numerator = self.normals[index] * to_vertex;
            let denominator = self.normals[index] * delta;

            if denominator == 0. {
                // Parallel to this edge and strictly outside it.
                if numerator < 0. {
                    return None;
                }
            } else if denominator < 0. && numerator < lower * denominator {
                lower = numerator / denominator;
                hit_index = Some(index);
            } else if denominator > 0. && numerator < upper * denominator {
                upper = numerator / denominator;
            }

            if upper < lower {
                return None;
            }
        }

        debug_assert!(lower >= 0. && lower <= input.max_fraction());

        hit_index.map(|index| {
            RaycastOutput::new(transform.rotation().rotate(self.normals[index]), lower)
        })
    }
}
