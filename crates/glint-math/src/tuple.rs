//! Homogeneous 4-tuples: points (w = 1) and vectors (w = 0).

use crate::approx_eq;
use nalgebra::Vector4;

/// A 4-component tuple. The w component distinguishes points (1.0) from
/// vectors (0.0), which is what makes translation apply to points but not
/// to directions when multiplied by a [`crate::Transform`].
pub type Tuple = Vector4<f64>;

/// Construct a point (w = 1.0).
#[inline]
pub fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

/// Construct a vector (w = 0.0).
#[inline]
pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

/// True when the tuple's w component marks it as a point.
#[inline]
pub fn is_point(t: &Tuple) -> bool {
    t.w == 1.0
}

/// True when the tuple's w component marks it as a vector.
#[inline]
pub fn is_vector(t: &Tuple) -> bool {
    t.w == 0.0
}

/// Cross product of two vectors. The w component of the result is 0.
pub fn cross(a: &Tuple, b: &Tuple) -> Tuple {
    vector(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Reflect the vector `v` about the normal `n`.
pub fn reflect(v: &Tuple, n: &Tuple) -> Tuple {
    v - n * 2.0 * v.dot(n)
}

/// Approximate component-wise equality within [`crate::EPSILON`].
pub fn tuple_eq(a: &Tuple, b: &Tuple) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
}
