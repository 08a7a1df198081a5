//! Ray-cone intersection (quadratic with an extra linear case).

use super::check_cap;
use crate::intersection::{Intersection, Intersections};
use crate::ray::Ray;
use crate::shape::ShapeId;
use glint_math::{vector, Tuple, EPSILON};

/// Intersect an object-space ray with the double-napped unit cone along
/// the y axis, truncated to `minimum < y < maximum`.
///
/// When the leading coefficient vanishes the ray is parallel to one of
/// the cone's halves and the equation degenerates to a single linear
/// root against the other half.
pub(crate) fn intersect(
    id: ShapeId,
    ray: &Ray,
    minimum: f64,
    maximum: f64,
    closed: bool,
) -> Intersections {
    let (dx, dy, dz) = (ray.direction.x, ray.direction.y, ray.direction.z);
    let (ox, oy, oz) = (ray.origin.x, ray.origin.y, ray.origin.z);

    let a = dx * dx - dy * dy + dz * dz;
    let b = 2.0 * ox * dx - 2.0 * oy * dy + 2.0 * oz * dz;
    let c = ox * ox - oy * oy + oz * oz;

    if a.abs() < EPSILON {
        let mut xs = Intersections::new();
        if b.abs() > EPSILON {
            xs.push(Intersection::new(-c / (2.0 * b), id));
        }
        intersect_caps(id, ray, minimum, maximum, closed, &mut xs);
        return xs;
    }

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

/// Test the end-cap disks. A cone's cap radius equals the |y| of the cap
/// plane, so each cap uses its own bound as the radius.
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
    if check_cap(ray, t, minimum) {
        xs.push(Intersection::new(t, id));
    }

    let t = (maximum - ray.origin.y) / ray.direction.y;
    if check_cap(ray, t, maximum) {
        xs.push(Intersection::new(t, id));
    }
}

/// Radial normal with a y component of -sign(y)·√(x²+z²), snapping to
/// (0, ±1, 0) within [`EPSILON`] of a cap.
pub(crate) fn normal_at(p: &Tuple, minimum: f64, maximum: f64) -> Tuple {
    let dist = p.x * p.x + p.z * p.z;
    if dist < 1.0 && p.y >= maximum - EPSILON {
        return vector(0.0, 1.0, 0.0);
    }
    if dist < 1.0 && p.y <= minimum + EPSILON {
        return vector(0.0, -1.0, 0.0);
    }
    let mut y = dist.sqrt();
    if p.y > 0.0 {
        y = -y;
    }
    vector(p.x, y, p.z)
}

#[cfg(test)]
mod tests {
    use crate::ray::Ray;
    use crate::shape::{Geometry, Shape, ShapeArena};
    use glint_math::{approx_eq, point, tuple_eq, vector};
    use crate::intersect::local_normal_at;

    fn infinite_cone() -> (ShapeArena, crate::shape::ShapeId) {
        let mut arena = ShapeArena::new();
        let c = arena.insert(Shape::cone(f64::NEG_INFINITY, f64::INFINITY, false));
        (arena, c)
    }

    #[test]
    fn test_ray_strikes_both_halves() {
        let cases = [
            (point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0), 5.0, 5.0),
            (
                point(0.0, 0.0, -5.0),
                vector(1.0, 1.0, 1.0),
                8.66025,
                8.66025,
            ),
            (
                point(1.0, 1.0, -5.0),
                vector(-0.5, -1.0, 1.0),
                4.55006,
                49.44994,
            ),
        ];
        let (arena, c) = infinite_cone();
        for (origin, direction, t0, t1) in cases {
            let r = Ray::new(origin, direction.normalize());
            let xs = arena.intersect(c, &r);
            assert_eq!(xs.len(), 2);
            assert!(approx_eq(xs[0].t, t0));
            assert!(approx_eq(xs[1].t, t1));
        }
    }

    #[test]
    fn test_ray_parallel_to_one_half() {
        let (arena, c) = infinite_cone();
        let r = Ray::new(point(0.0, 0.0, -1.0), vector(0.0, 1.0, 1.0).normalize());
        let xs = arena.intersect(c, &r);
        assert_eq!(xs.len(), 1);
        assert!(approx_eq(xs[0].t, 0.35355));
    }

    #[test]
    fn test_capped_cone_intersections() {
        let cases = [
            (point(0.0, 0.0, -5.0), vector(0.0, 1.0, 0.0), 0),
            (point(0.0, 0.0, -0.25), vector(0.0, 1.0, 1.0), 2),
            (point(0.0, 0.0, -0.25), vector(0.0, 1.0, 0.0), 4),
        ];
        let mut arena = ShapeArena::new();
        let c = arena.insert(Shape::cone(-0.5, 0.5, true));
        for (origin, direction, count) in cases {
            let r = Ray::new(origin, direction.normalize());
            assert_eq!(arena.intersect(c, &r).len(), count);
        }
    }

    #[test]
    fn test_local_wall_normals() {
        // unnormalized object-space normals, checked below the
        // world-space conversion
        let cases = [
            (point(0.0, 0.0, 0.0), vector(0.0, 0.0, 0.0)),
            (
                point(1.0, 1.0, 1.0),
                vector(1.0, -2.0_f64.sqrt(), 1.0),
            ),
            (point(-1.0, -1.0, 0.0), vector(-1.0, 1.0, 0.0)),
        ];
        let geometry = Geometry::Cone {
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            closed: false,
        };
        for (p, expected) in cases {
            assert!(tuple_eq(&local_normal_at(&geometry, &p), &expected));
        }
    }
}
