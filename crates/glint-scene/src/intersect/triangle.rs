//! Ray-triangle intersection via the determinant/barycentric method.

use crate::intersection::{Intersection, Intersections};
use crate::ray::Ray;
use crate::shape::{ShapeId, Triangle};
use glint_math::{cross, EPSILON};

/// Intersect an object-space ray with a triangle.
///
/// Uses the precomputed edges: a near-zero determinant means the ray is
/// parallel to the triangle's plane; the barycentric coordinates (u, v)
/// reject points outside the edges. At most one intersection.
pub(crate) fn intersect(id: ShapeId, ray: &Ray, tri: &Triangle) -> Intersections {
    let dir_cross_e2 = cross(&ray.direction, &tri.e2);
    let det = tri.e1.dot(&dir_cross_e2);
    if det.abs() < EPSILON {
        return Intersections::new();
    }

    let f = 1.0 / det;
    let p1_to_origin = ray.origin - tri.p1;
    let u = f * p1_to_origin.dot(&dir_cross_e2);
    if u < 0.0 || u > 1.0 {
        return Intersections::new();
    }

    let origin_cross_e1 = cross(&p1_to_origin, &tri.e1);
    let v = f * ray.direction.dot(&origin_cross_e1);
    if v < 0.0 || (u + v) > 1.0 {
        return Intersections::new();
    }

    let t = f * tri.e2.dot(&origin_cross_e1);
    Intersections::from(vec![Intersection::new(t, id)])
}
