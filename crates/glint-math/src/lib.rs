#![warn(missing_docs)]

//! Math types for the glint ray tracer.
//!
//! Thin wrappers around nalgebra providing the domain types the tracer is
//! built on: homogeneous 4-tuples (points and vectors), colors, and 4x4
//! affine transforms with cofactor-based inversion.
//!
//! All geometric and color comparisons in the tracer are approximate with
//! tolerance [`EPSILON`]; composed transforms and multi-bounce recursion
//! accumulate enough floating-point drift that exact equality is never
//! meaningful.

mod color;
mod transform;
mod tuple;

pub use color::Color;
pub use transform::{SingularMatrix, Transform};
pub use tuple::{cross, is_point, is_vector, point, reflect, tuple_eq, vector, Tuple};

/// Tolerance for approximate float comparison.
pub const EPSILON: f64 = 1e-4;

/// Approximate scalar equality within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert!(approx_eq(1.0, 1.0 + 1e-5));
        assert!(!approx_eq(1.0, 1.001));
    }
}
