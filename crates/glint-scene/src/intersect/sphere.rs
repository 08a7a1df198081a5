//! Ray-sphere intersection (quadratic equation).

use crate::intersection::{Intersection, Intersections};
use crate::ray::Ray;
use crate::shape::ShapeId;
use glint_math::{point, Tuple};

/// Intersect an object-space ray with the unit sphere at the origin.
///
/// Returns both roots of the quadratic (entry and exit), unsorted-as-found
/// but in ascending order by construction; tangent rays yield a double
/// root.
pub(crate) fn intersect(id: ShapeId, ray: &Ray) -> Intersections {
    let sphere_to_ray = ray.origin - point(0.0, 0.0, 0.0);
    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * ray.direction.dot(&sphere_to_ray);
    let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Intersections::new();
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    Intersections::from(vec![Intersection::new(t1, id), Intersection::new(t2, id)])
}

/// Object-space normal: the point minus the center.
pub(crate) fn normal_at(p: &Tuple) -> Tuple {
    p - point(0.0, 0.0, 0.0)
}
