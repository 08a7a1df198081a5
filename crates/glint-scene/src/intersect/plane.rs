//! Ray-plane intersection for the infinite xz plane.

use crate::intersection::{Intersection, Intersections};
use crate::ray::Ray;
use crate::shape::ShapeId;
use glint_math::{vector, Tuple, EPSILON};

/// Intersect an object-space ray with the y = 0 plane.
///
/// Rays parallel to the plane (including coplanar rays) miss.
pub(crate) fn intersect(id: ShapeId, ray: &Ray) -> Intersections {
    if ray.direction.y.abs() < EPSILON {
        return Intersections::new();
    }
    let t = -ray.origin.y / ray.direction.y;
    Intersections::from(vec![Intersection::new(t, id)])
}

/// The plane's normal is constant.
pub(crate) fn normal_at() -> Tuple {
    vector(0.0, 1.0, 0.0)
}
