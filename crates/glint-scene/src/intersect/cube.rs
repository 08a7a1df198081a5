//! Ray-cube intersection via the slab method.

use crate::intersection::{Intersection, Intersections};
use crate::ray::Ray;
use crate::shape::ShapeId;
use glint_math::{vector, Tuple, EPSILON};

/// Per-axis slab interval: where the ray enters and leaves the [-1, 1]
/// slab on one axis. A near-zero direction component pushes the interval
/// ends to ±infinity.
fn check_axis(origin: f64, direction: f64) -> (f64, f64) {
    let tmin_numerator = -1.0 - origin;
    let tmax_numerator = 1.0 - origin;
    let (tmin, tmax) = if direction.abs() >= EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (tmin_numerator * f64::INFINITY, tmax_numerator * f64::INFINITY)
    };
    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

/// Intersect an object-space ray with the axis-aligned unit cube.
///
/// The ray hits when the intersection of the three per-axis slab
/// intervals is nonempty.
pub(crate) fn intersect(id: ShapeId, ray: &Ray) -> Intersections {
    let (xtmin, xtmax) = check_axis(ray.origin.x, ray.direction.x);
    let (ytmin, ytmax) = check_axis(ray.origin.y, ray.direction.y);
    let (ztmin, ztmax) = check_axis(ray.origin.z, ray.direction.z);

    let tmin = xtmin.max(ytmin).max(ztmin);
    let tmax = xtmax.min(ytmax).min(ztmax);
    if tmin > tmax {
        return Intersections::new();
    }
    Intersections::from(vec![
        Intersection::new(tmin, id),
        Intersection::new(tmax, id),
    ])
}

/// Face normal: the axis with the largest absolute coordinate, preferring
/// x, then y, then z on exact ties. The priority order is fixed; corner
/// points resolve the same way every time.
pub(crate) fn normal_at(p: &Tuple) -> Tuple {
    let maxc = p.x.abs().max(p.y.abs()).max(p.z.abs());
    if maxc == p.x.abs() {
        vector(p.x, 0.0, 0.0)
    } else if maxc == p.y.abs() {
        vector(0.0, p.y, 0.0)
    } else {
        vector(0.0, 0.0, p.z)
    }
}

#[cfg(test)]
mod tests {
    use crate::ray::Ray;
    use crate::shape::{Shape, ShapeArena};
    use glint_math::{approx_eq, point, tuple_eq, vector};

    fn cube() -> (ShapeArena, crate::shape::ShapeId) {
        let mut arena = ShapeArena::new();
        let c = arena.insert(Shape::cube());
        (arena, c)
    }

    #[test]
    fn test_ray_strikes_each_face() {
        let cases = [
            (point(5.0, 0.5, 0.0), vector(-1.0, 0.0, 0.0), 4.0, 6.0),
            (point(-5.0, 0.5, 0.0), vector(1.0, 0.0, 0.0), 4.0, 6.0),
            (point(0.5, 5.0, 0.0), vector(0.0, -1.0, 0.0), 4.0, 6.0),
            (point(0.5, -5.0, 0.0), vector(0.0, 1.0, 0.0), 4.0, 6.0),
            (point(0.5, 0.0, 5.0), vector(0.0, 0.0, -1.0), 4.0, 6.0),
            (point(0.5, 0.0, -5.0), vector(0.0, 0.0, 1.0), 4.0, 6.0),
            (point(0.0, 0.5, 0.0), vector(0.0, 0.0, 1.0), -1.0, 1.0),
        ];
        let (arena, c) = cube();
        for (origin, direction, t1, t2) in cases {
            let xs = arena.intersect(c, &Ray::new(origin, direction));
            assert_eq!(xs.len(), 2);
            assert!(approx_eq(xs[0].t, t1));
            assert!(approx_eq(xs[1].t, t2));
        }
    }

    #[test]
    fn test_ray_misses() {
        let cases = [
            (point(-2.0, 0.0, 0.0), vector(0.2673, 0.5345, 0.8018)),
            (point(0.0, -2.0, 0.0), vector(0.8018, 0.2673, 0.5345)),
            (point(0.0, 0.0, -2.0), vector(0.5345, 0.8018, 0.2673)),
            (point(2.0, 0.0, 2.0), vector(0.0, 0.0, -1.0)),
            (point(0.0, 2.0, 2.0), vector(0.0, -1.0, 0.0)),
            (point(2.0, 2.0, 0.0), vector(-1.0, 0.0, 0.0)),
        ];
        let (arena, c) = cube();
        for (origin, direction) in cases {
            assert!(arena.intersect(c, &Ray::new(origin, direction)).is_empty());
        }
    }

    #[test]
    fn test_face_normals() {
        let cases = [
            (point(1.0, 0.5, -0.8), vector(1.0, 0.0, 0.0)),
            (point(-1.0, -0.2, 0.9), vector(-1.0, 0.0, 0.0)),
            (point(-0.4, 1.0, -0.1), vector(0.0, 1.0, 0.0)),
            (point(0.3, -1.0, -0.7), vector(0.0, -1.0, 0.0)),
            (point(-0.6, 0.3, 1.0), vector(0.0, 0.0, 1.0)),
            (point(0.4, 0.4, -1.0), vector(0.0, 0.0, -1.0)),
        ];
        let (arena, c) = cube();
        for (p, expected) in cases {
            assert!(tuple_eq(&arena.normal_at(c, &p), &expected));
        }
    }

    #[test]
    fn test_corner_normals_prefer_x() {
        let (arena, c) = cube();
        assert!(tuple_eq(
            &arena.normal_at(c, &point(1.0, 1.0, 1.0)),
            &vector(1.0, 0.0, 0.0)
        ));
        assert!(tuple_eq(
            &arena.normal_at(c, &point(-1.0, -1.0, -1.0)),
            &vector(-1.0, 0.0, 0.0)
        ));
    }
}
