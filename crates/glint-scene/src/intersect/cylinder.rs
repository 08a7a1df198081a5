//! Ray-cylinder intersection (quadratic in x and z).

use super::check_cap;
use crate::intersection::{Intersection, Intersections};
use crate::ray::Ray;
use crate::shape::ShapeId;
use glint_math::{vector, Tuple, EPSILON};

/// Intersect an object-space ray with the unit-radius cylinder along the
/// y axis, truncated to `minimum < y < maximum`.
///
/// A ray parallel to the axis never meets the wall, so only the caps are
/// tested in that case.
pub(crate) fn intersect(
    id: ShapeId,
    ray: &Ray,
    minimum: f64,
    maximum: f64,
    closed: bool,
) -> Intersections {
    let a = ray.direction.x * ray.direction.x + ray.direction.z * ray.direction.z;
    if a.abs() < EPSILON {
        let mut xs = Intersections::new();
        intersect_caps(id, ray, minimum, maximum, closed, &mut xs);
        return xs;
    }

    let b = 2.0 * ray.origin.x * ray.direction.x + 2.0 * ray.origin.z * ray.direction.z;
    let c = ray.origin.x * ray.origin.x + ray.origin.z * ray.origin.z - 1.0;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Intersections::new();
    }

    let sqrt_disc = disc.sqrt();
    let mut t0 = (-b - sqrt_disc) / (2.0 * a);
    let mut t1 = (-b + sqrt_disc) / (2.0 * a);
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }

    let mut xs = Intersections::new();
    for t in [t0, t1] {
        let y = ray.origin.y + t * ray.direction.y;
        if minimum < y && y < maximum {
            xs.push(Intersection::new(t, id));
        }
    }
    intersect_caps(id, ray, minimum, maximum, closed, &mut xs);
    xs
}

/// Test the end-cap disks at y = minimum and y = maximum.
fn intersect_caps(
    id: ShapeId,
    ray: &Ray,
    minimum: f64,
    maximum: f64,
    closed: bool,
    xs: &mut Intersections,
) {
    if !closed || ray.direction.y.abs() < EPSILON {
        return;
    }

    let t = (minimum - ray.origin.y) / ray.direction.y;
    if check_cap(ray, t, 1.0) {
        xs.push(Intersection::new(t, id));
    }

    let t = (maximum - ray.origin.y) / ray.direction.y;
    if check_cap(ray, t, 1.0) {
        xs.push(Intersection::new(t, id));
    }
}

/// Radial normal, snapping to (0, ±1, 0) within [`EPSILON`] of a cap.
pub(crate) fn normal_at(p: &Tuple, minimum: f64, maximum: f64) -> Tuple {
    let dist = p.x * p.x + p.z * p.z;
    if dist < 1.0 && p.y >= maximum - EPSILON {
        vector(0.0, 1.0, 0.0)
    } else if dist < 1.0 && p.y <= minimum + EPSILON {
        vector(0.0, -1.0, 0.0)
    } else {
        vector(p.x, 0.0, p.z)
    }
}
