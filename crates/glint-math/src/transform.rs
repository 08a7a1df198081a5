//! 4x4 affine transforms with exact cofactor-based inversion.

use crate::tuple::{cross, Tuple};
use crate::EPSILON;
use nalgebra::{Matrix2, Matrix3, Matrix4};
use std::ops::Mul;
use thiserror::Error;

/// Error returned when inverting a matrix whose determinant is zero.
///
/// Well-formed scenes never produce one: every canonical builder yields an
/// invertible matrix, and products of invertible matrices stay invertible.
/// A zero scale factor is the usual culprit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("matrix is not invertible: determinant is zero")]
pub struct SingularMatrix;

/// A 4x4 affine transformation matrix.
///
/// Applying a transform to a tuple is `Transform * tuple`, so in a product
/// `A * B` the factor `B` applies first. Shape and pattern transforms are
/// composed by post-multiplication, which means the most recently added
/// transform is the first one a point sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wrap an existing matrix.
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Translation by `(x, y, z)`. Moves points, leaves vectors alone.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = x;
        m[(1, 3)] = y;
        m[(2, 3)] = z;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(x, y, z)`.
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = x;
        m[(1, 1)] = y;
        m[(2, 2)] = z;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// General shear: each parameter moves one coordinate in proportion to
    /// another, e.g. `xy` moves x in proportion to y.
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 1)] = xy;
        m[(0, 2)] = xz;
        m[(1, 0)] = yx;
        m[(1, 2)] = yz;
        m[(2, 0)] = zx;
        m[(2, 1)] = zy;
        Self { matrix: m }
    }

    /// World-to-camera transform for an eye at `from` looking at `to` with
    /// the given approximate `up` vector.
    ///
    /// Builds an orthonormal basis (left, true_up, -forward) as the rotation
    /// rows, composed with `translation(-from)`.
    pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Self {
        let forward = (to - from).normalize();
        let left = cross(&forward, &up.normalize());
        let true_up = cross(&left, &forward);
        let mut m = Matrix4::identity();
        m[(0, 0)] = left.x;
        m[(0, 1)] = left.y;
        m[(0, 2)] = left.z;
        m[(1, 0)] = true_up.x;
        m[(1, 1)] = true_up.y;
        m[(1, 2)] = true_up.z;
        m[(2, 0)] = -forward.x;
        m[(2, 1)] = -forward.y;
        m[(2, 2)] = -forward.z;
        Self { matrix: m } * Self::translation(-from.x, -from.y, -from.z)
    }

    /// Transposed matrix.
    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// The 3x3 matrix left after removing `row` and `col`.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix3<f64> {
        let mut m = Matrix3::zeros();
        for (ri, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (ci, c) in (0..4).filter(|&c| c != col).enumerate() {
                m[(ri, ci)] = self.matrix[(r, c)];
            }
        }
        m
    }

    /// Determinant of the submatrix at `(row, col)`.
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        det3(&self.submatrix(row, col))
    }

    /// Minor with the checkerboard sign `(-1)^(row + col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f64 {
        (0..4)
            .map(|col| self.matrix[(0, col)] * self.cofactor(0, col))
            .sum()
    }

    /// True when the determinant is nonzero.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Inverse by the cofactor method.
    ///
    /// Each inverse entry is `cofactor(row, col) / determinant` written at
    /// the transposed position `(col, row)`.
    pub fn inverse(&self) -> Result<Self, SingularMatrix> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(SingularMatrix);
        }
        let mut m = Matrix4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                m[(col, row)] = self.cofactor(row, col) / det;
            }
        }
        Ok(Self { matrix: m })
    }

    /// Approximate entry-wise equality within [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.matrix
            .iter()
            .zip(other.matrix.iter())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl Mul<Tuple> for Transform {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        self.matrix * rhs
    }
}

fn det2(m: &Matrix2<f64>) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

fn submatrix3(m: &Matrix3<f64>, row: usize, col: usize) -> Matrix2<f64> {
    let mut out = Matrix2::zeros();
    for (ri, r) in (0..3).filter(|&r| r != row).enumerate() {
        for (ci, c) in (0..3).filter(|&c| c != col).enumerate() {
            out[(ri, ci)] = m[(r, c)];
        }
    }
    out
}

fn det3(m: &Matrix3<f64>) -> f64 {
    (0..3)
        .map(|col| {
            let minor = det2(&submatrix3(m, 0, col));
            let cofactor = if col % 2 == 1 { -minor } else { minor };
            m[(0, col)] * cofactor
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;
    use crate::tuple::{point, tuple_eq, vector};
    use std::f64::consts::PI;

    #[test]
    fn test_matrix_tuple_multiplication() {
        let m = Transform::from_matrix(Matrix4::new(
            1.0, 2.0, 3.0, 4.0, //
            2.0, 4.0, 4.0, 2.0, //
            8.0, 6.0, 4.0, 1.0, //
            0.0, 0.0, 0.0, 1.0,
        ));
        let t = Tuple::new(1.0, 2.0, 3.0, 1.0);
        assert!(tuple_eq(&(m * t), &Tuple::new(18.0, 24.0, 33.0, 1.0)));
    }

    #[test]
    fn test_determinant_4x4() {
        let m = Transform::from_matrix(Matrix4::new(
            -2.0, -8.0, 3.0, 5.0, //
            -3.0, 1.0, 7.0, 3.0, //
            1.0, 2.0, -9.0, 6.0, //
            -6.0, 7.0, 7.0, -9.0,
        ));
        assert!(approx_eq(m.cofactor(0, 0), 690.0));
        assert!(approx_eq(m.cofactor(0, 1), 447.0));
        assert!(approx_eq(m.cofactor(0, 2), 210.0));
        assert!(approx_eq(m.cofactor(0, 3), 51.0));
        assert!(approx_eq(m.determinant(), -4071.0));
    }

    #[test]
    fn test_noninvertible_matrix() {
        let m = Transform::from_matrix(Matrix4::new(
            -4.0, 2.0, -2.0, -3.0, //
            9.0, 6.0, 2.0, 6.0, //
            0.0, -5.0, 1.0, -5.0, //
            0.0, 0.0, 0.0, 0.0,
        ));
        assert!(!m.is_invertible());
        assert_eq!(m.inverse(), Err(SingularMatrix));
    }

    #[test]
    fn test_inverse() {
        let m = Transform::from_matrix(Matrix4::new(
            -5.0, 2.0, 6.0, -8.0, //
            1.0, -5.0, 1.0, 8.0, //
            7.0, 7.0, -6.0, -7.0, //
            1.0, -3.0, 7.0, 4.0,
        ));
        let inv = m.inverse().unwrap();
        assert!(approx_eq(m.determinant(), 532.0));
        assert!(approx_eq(inv.matrix[(3, 2)], -160.0 / 532.0));
        assert!(approx_eq(inv.matrix[(2, 3)], 105.0 / 532.0));
        let expected = Transform::from_matrix(Matrix4::new(
            0.21805, 0.45113, 0.24060, -0.04511, //
            -0.80827, -1.45677, -0.44361, 0.52068, //
            -0.07895, -0.22368, -0.05263, 0.19737, //
            -0.52256, -0.81391, -0.30075, 0.30639,
        ));
        assert!(inv.approx_eq(&expected));
    }

    #[test]
    fn test_multiply_product_by_inverse() {
        let a = Transform::translation(1.0, 2.0, 3.0) * Transform::scaling(2.0, 3.0, 4.0);
        let b = Transform::rotation_x(0.5) * Transform::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let c = a * b;
        assert!((c * b.inverse().unwrap()).approx_eq(&a));
    }

    #[test]
    fn test_builders_invert_to_identity() {
        let builders = [
            Transform::translation(5.0, -3.0, 2.0),
            Transform::scaling(2.0, 3.0, 4.0),
            Transform::rotation_x(PI / 4.0),
            Transform::rotation_y(PI / 3.0),
            Transform::rotation_z(PI / 6.0),
            Transform::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        ];
        for t in builders {
            let round_trip = t * t.inverse().unwrap();
            assert!(round_trip.approx_eq(&Transform::identity()));
        }
    }

    #[test]
    fn test_translation_moves_points_not_vectors() {
        let t = Transform::translation(5.0, -3.0, 2.0);
        assert!(tuple_eq(&(t * point(-3.0, 4.0, 5.0)), &point(2.0, 1.0, 7.0)));
        let v = vector(-3.0, 4.0, 5.0);
        assert!(tuple_eq(&(t * v), &v));
        let inv = t.inverse().unwrap();
        assert!(tuple_eq(
            &(inv * point(-3.0, 4.0, 5.0)),
            &point(-8.0, 7.0, 3.0)
        ));
    }

    #[test]
    fn test_scaling_applies_to_vectors() {
        let t = Transform::scaling(2.0, 3.0, 4.0);
        assert!(tuple_eq(
            &(t * vector(-4.0, 6.0, 8.0)),
            &vector(-8.0, 18.0, 32.0)
        ));
    }

    #[test]
    fn test_rotation_x() {
        let p = point(0.0, 1.0, 0.0);
        let half_quarter = Transform::rotation_x(PI / 4.0);
        let full_quarter = Transform::rotation_x(PI / 2.0);
        let s = 2.0_f64.sqrt() / 2.0;
        assert!(tuple_eq(&(half_quarter * p), &point(0.0, s, s)));
        assert!(tuple_eq(&(full_quarter * p), &point(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotation_y() {
        let p = point(0.0, 0.0, 1.0);
        let s = 2.0_f64.sqrt() / 2.0;
        assert!(tuple_eq(
            &(Transform::rotation_y(PI / 4.0) * p),
            &point(s, 0.0, s)
        ));
    }

    #[test]
    fn test_rotation_z() {
        let p = point(0.0, 1.0, 0.0);
        let s = 2.0_f64.sqrt() / 2.0;
        assert!(tuple_eq(
            &(Transform::rotation_z(PI / 4.0) * p),
            &point(-s, s, 0.0)
        ));
    }

    #[test]
    fn test_shearing_moves_x_in_proportion_to_y() {
        let t = Transform::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(tuple_eq(&(t * point(2.0, 3.0, 4.0)), &point(5.0, 3.0, 4.0)));
    }

    #[test]
    fn test_chained_transforms_apply_in_reverse_order() {
        let p = point(1.0, 0.0, 1.0);
        let rot = Transform::rotation_x(PI / 2.0);
        let scale = Transform::scaling(5.0, 5.0, 5.0);
        let translate = Transform::translation(10.0, 5.0, 7.0);
        let chained = translate * scale * rot;
        assert!(tuple_eq(&(chained * p), &point(15.0, 0.0, 7.0)));
    }

    #[test]
    fn test_view_transform_default_orientation() {
        let t = Transform::view_transform(
            point(0.0, 0.0, 0.0),
            point(0.0, 0.0, -1.0),
            vector(0.0, 1.0, 0.0),
        );
        assert!(t.approx_eq(&Transform::identity()));
    }

    #[test]
    fn test_view_transform_positive_z_mirrors() {
        let t = Transform::view_transform(
            point(0.0, 0.0, 0.0),
            point(0.0, 0.0, 1.0),
            vector(0.0, 1.0, 0.0),
        );
        assert!(t.approx_eq(&Transform::scaling(-1.0, 1.0, -1.0)));
    }

    #[test]
    fn test_view_transform_moves_the_world() {
        let t = Transform::view_transform(
            point(0.0, 0.0, 8.0),
            point(0.0, 0.0, 0.0),
            vector(0.0, 1.0, 0.0),
        );
        assert!(t.approx_eq(&Transform::translation(0.0, 0.0, -8.0)));
    }

    #[test]
    fn test_view_transform_arbitrary() {
        let t = Transform::view_transform(
            point(1.0, 3.0, 2.0),
            point(4.0, -2.0, 8.0),
            vector(1.0, 1.0, 0.0),
        );
        let expected = Transform::from_matrix(Matrix4::new(
            -0.50709, 0.50709, 0.67612, -2.36643, //
            0.76772, 0.60609, 0.12122, -2.82843, //
            -0.35857, 0.59761, -0.71714, 0.00000, //
            0.00000, 0.00000, 0.00000, 1.00000,
        ));
        assert!(t.approx_eq(&expected));
    }
}
