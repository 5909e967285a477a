//! Square-matrix algebra: identity, determinant, adjoint, inverse.
//!
//! Each operation dispatches on the const dimension. N = 1, 2, 3 and 4 use
//! closed forms (the 4x4 path shares two-term products between the
//! determinant, adjoint and inverse); every other N falls back to recursive
//! cofactor expansion. The match is on a const, so each monomorphized method
//! keeps only its own arm.
//!
//! The cofactor path stays public under `*_cofactor` names for cross-checking
//! the closed forms.
//!
//! # Checked and unchecked inverse
//!
//! - [`Matrix::inverse`] returns [`Error::SingularMatrix`] when the
//!   determinant is exactly zero.
//! - [`Matrix::inverse_unchecked`] asserts a non-zero determinant in debug
//!   builds only; in release builds a singular input yields inf/nan.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::Mat3;
//!
//! let m = Mat3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 4.0, 0.0],
//!     [1.0, 0.0, 1.0],
//! ]);
//! assert_eq!(m.determinant(), 8.0);
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(m * inv, Mat3::identity());
//!
//! assert!(Mat3::ZERO.inverse().is_err());
//! ```

use fixmat_core::{Error, Result, Scalar};

use crate::{Matrix, Vector, closed, cofactor};

impl<const N: usize, S: Scalar> Matrix<N, N, S> {
    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { S::ONE } else { S::ZERO })
    }

    /// Overwrites `self` with the identity.
    #[inline]
    pub fn load_identity(&mut self) {
        *self = Self::identity();
    }

    /// Diagonal matrix with `d` on the diagonal.
    #[inline]
    pub fn from_diagonal(d: Vector<N, S>) -> Self {
        Self::from_fn(|i, j| if i == j { d[i] } else { S::ZERO })
    }

    /// Diagonal elements.
    #[inline]
    pub fn diagonal(&self) -> Vector<N, S> {
        Vector::from_fn(|i| self.m[i][i])
    }

    /// Determinant.
    pub fn determinant(&self) -> S {
        let m = self.as_slice();
        match N {
            0 => S::ONE,
            1 => m[0],
            2 => closed::determinant2(m),
            3 => closed::determinant3(m),
            4 => closed::determinant4(m),
            _ => cofactor::determinant(m, N),
        }
    }

    /// Adjoint (transpose of the cofactor matrix), so that
    /// `M * adjoint(M) = det(M) * I`.
    pub fn adjoint(&self) -> Self {
        let m = self.as_slice();
        let mut out = Self::ZERO;
        let dst = out.as_mut_slice();
        match N {
            0 => {}
            1 => dst[0] = S::ONE,
            2 => dst.copy_from_slice(&closed::adjoint2(m)),
            3 => dst.copy_from_slice(&closed::adjoint3(m)),
            4 => dst.copy_from_slice(&closed::adjoint4(m)),
            _ => dst.copy_from_slice(&cofactor::adjoint(m, N)),
        }
        out
    }

    fn inverse_with_det(&self) -> (S, Self) {
        let m = self.as_slice();
        let mut out = Self::ZERO;
        let dst = out.as_mut_slice();
        let det = match N {
            0 => S::ONE,
            1 => {
                dst[0] = S::ONE / m[0];
                m[0]
            }
            2 => {
                let (det, inv) = closed::inverse2(m);
                dst.copy_from_slice(&inv);
                det
            }
            3 => {
                let (det, inv) = closed::inverse3(m);
                dst.copy_from_slice(&inv);
                det
            }
            4 => {
                let (det, inv) = closed::inverse4(m);
                dst.copy_from_slice(&inv);
                det
            }
            _ => {
                let (det, inv) = cofactor::inverse(m, N);
                dst.copy_from_slice(&inv);
                det
            }
        };
        (det, out)
    }

    /// Inverse, or [`Error::SingularMatrix`] if the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let (det, inv) = self.inverse_with_det();
        if det == S::ZERO {
            return Err(Error::singular_matrix(N));
        }
        Ok(inv)
    }

    /// Inverse without the singularity check.
    ///
    /// A zero determinant panics in debug builds and yields inf/nan entries in
    /// release builds. Use where the matrix is invertible by construction.
    pub fn inverse_unchecked(&self) -> Self {
        let (det, inv) = self.inverse_with_det();
        debug_assert!(det != S::ZERO, "inverse of singular {}x{} matrix", N, N);
        inv
    }

    /// Right division, `self * rhs⁻¹`.
    pub fn mul_inverse(&self, rhs: &Self) -> Result<Self> {
        Ok(*self * rhs.inverse()?)
    }

    /// Determinant by recursive cofactor expansion, for every N.
    pub fn determinant_cofactor(&self) -> S {
        cofactor::determinant(self.as_slice(), N)
    }

    /// Adjoint by recursive cofactor expansion, for every N.
    pub fn adjoint_cofactor(&self) -> Self {
        let mut out = Self::ZERO;
        if N > 0 {
            out.as_mut_slice()
                .copy_from_slice(&cofactor::adjoint(self.as_slice(), N));
        }
        out
    }

    /// Inverse by recursive cofactor expansion, for every N.
    pub fn inverse_cofactor(&self) -> Result<Self> {
        if N == 0 {
            return Ok(*self);
        }
        let (det, inv) = cofactor::inverse(self.as_slice(), N);
        if det == S::ZERO {
            return Err(Error::singular_matrix(N));
        }
        let mut out = Self::ZERO;
        out.as_mut_slice().copy_from_slice(&inv);
        Ok(out)
    }
}

impl<S: Scalar> Matrix<4, 4, S> {
    /// Upper-left 3x3 block (the linear part of an affine transform).
    #[inline]
    pub fn upper_left3(&self) -> Matrix<3, 3, S> {
        Matrix::from_fn(|i, j| self.m[i][j])
    }
}

impl<const N: usize, S: Scalar> Default for Matrix<N, N, S> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DMat2, DMat3, DMat4, Mat2, Mat3, Mat4};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    type DMat1 = Matrix<1, 1, f64>;
    type DMat5 = Matrix<5, 5, f64>;

    fn assert_close<const N: usize>(a: &Matrix<N, N, f64>, b: &Matrix<N, N, f64>, eps: f64) {
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert!((x - y).abs() < eps, "{a:?}\n!=\n{b:?}");
        }
    }

    fn sample4() -> DMat4 {
        DMat4::from_rows([
            [2.0, 1.0, 0.0, 3.0],
            [1.0, 4.0, 1.0, 0.0],
            [0.0, 2.0, 5.0, 1.0],
            [1.0, 0.0, 1.0, 6.0],
        ])
    }

    fn sample5() -> DMat5 {
        DMat5::from_fn(|i, j| if i == j { 6.0 } else { ((i * 3 + j * 7) % 5) as f64 - 2.0 })
    }

    #[test]
    fn test_identity() {
        let m = Mat4::identity();
        assert_eq!(m.diagonal().to_array(), [1.0; 4]);
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(Mat4::default(), m);

        let mut n = Mat4::ZERO;
        n.load_identity();
        assert_eq!(n, m);
    }

    #[test]
    fn test_determinant_closed_forms() {
        assert_eq!(DMat1::from_rows([[3.0]]).determinant(), 3.0);
        assert_eq!(Mat2::from_rows([[3.0, 8.0], [4.0, 6.0]]).determinant(), -14.0);
        let m3 = DMat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m3.determinant(), -306.0);
        assert_eq!(sample4().determinant(), sample4().determinant_cofactor());
    }

    #[test]
    fn test_inverse_roundtrip_all_sizes() {
        let m1 = DMat1::from_rows([[4.0]]);
        assert_close(&(m1 * m1.inverse().unwrap()), &DMat1::identity(), 1e-12);

        let m2 = DMat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_close(&(m2 * m2.inverse().unwrap()), &DMat2::identity(), 1e-12);
        assert_close(&m2.inverse().unwrap().inverse().unwrap(), &m2, 1e-12);

        let m3 = DMat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_close(&(m3 * m3.inverse().unwrap()), &DMat3::identity(), 1e-12);
        assert_close(&m3.inverse().unwrap().inverse().unwrap(), &m3, 1e-12);

        let m4 = sample4();
        assert_close(&(m4 * m4.inverse().unwrap()), &DMat4::identity(), 1e-12);
        assert_close(&m4.inverse().unwrap().inverse().unwrap(), &m4, 1e-12);

        let m5 = sample5();
        assert!(m5.determinant() != 0.0);
        assert_close(&(m5 * m5.inverse().unwrap()), &DMat5::identity(), 1e-12);
        assert_close(&m5.inverse().unwrap().inverse().unwrap(), &m5, 1e-10);
    }

    #[test]
    fn test_adjoint_is_inverse_times_det() {
        let m4 = sample4();
        let scaled = m4.inverse().unwrap() * m4.determinant();
        assert_close(&m4.adjoint(), &scaled, 1e-10);

        let m5 = sample5();
        let scaled = m5.inverse().unwrap() * m5.determinant();
        assert_close(&m5.adjoint(), &scaled, 1e-8);
    }

    #[test]
    fn test_adjoint_1x1() {
        assert_eq!(DMat1::from_rows([[5.0]]).adjoint().m, [[1.0]]);
    }

    #[test]
    fn test_singular_is_error() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        let err = m.inverse().unwrap_err();
        assert_eq!(err, Error::singular_matrix(3));
        assert!(Mat4::ZERO.inverse().is_err());
        assert!(DMat5::ZERO.inverse_cofactor().is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "singular")]
    fn test_unchecked_singular_panics_in_debug() {
        let _ = Mat2::ZERO.inverse_unchecked();
    }

    #[test]
    fn test_inverse_unchecked_matches_checked() {
        let m = sample4();
        assert_eq!(m.inverse_unchecked(), m.inverse().unwrap());
    }

    #[test]
    fn test_mul_inverse() {
        let a = sample4();
        let q = a.mul_inverse(&a).unwrap();
        assert_close(&q, &DMat4::identity(), 1e-12);
    }

    #[test]
    fn test_upper_left3() {
        let m = Mat4::from_fn(|i, j| (i * 4 + j) as f32);
        assert_eq!(m.upper_left3().m, [[0.0, 1.0, 2.0], [4.0, 5.0, 6.0], [8.0, 9.0, 10.0]]);
    }

    #[test]
    fn test_single_precision_inverse() {
        let m = Mat4::from_rows([
            [2.0, 1.0, 0.0, 3.0],
            [1.0, 4.0, 1.0, 0.0],
            [0.0, 2.0, 5.0, 1.0],
            [1.0, 0.0, 1.0, 6.0],
        ]);
        let p = m * m.inverse().unwrap();
        for (a, b) in p.as_slice().iter().zip(Mat4::identity().as_slice()) {
            assert!((a - b).abs() < 1e-5);
        }
        assert_relative_eq!(m.determinant(), 118.0);
    }

    proptest! {
        #[test]
        fn prop_determinant2_matches_cofactor(v in prop::array::uniform4(-10.0f64..10.0)) {
            let m = DMat2::from_slice(&v).unwrap();
            let (a, b) = (m.determinant(), m.determinant_cofactor());
            prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()));
        }

        #[test]
        fn prop_determinant3_matches_cofactor(v in prop::array::uniform9(-10.0f64..10.0)) {
            let m = DMat3::from_slice(&v).unwrap();
            let (a, b) = (m.determinant(), m.determinant_cofactor());
            prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()));
        }

        #[test]
        fn prop_determinant4_matches_cofactor(v in prop::array::uniform16(-10.0f64..10.0)) {
            let m = DMat4::from_slice(&v).unwrap();
            let (a, b) = (m.determinant(), m.determinant_cofactor());
            prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()));
        }

        #[test]
        fn prop_adjoint4_matches_cofactor(v in prop::array::uniform16(-10.0f64..10.0)) {
            let m = DMat4::from_slice(&v).unwrap();
            let (a, b) = (m.adjoint(), m.adjoint_cofactor());
            for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
                prop_assert!((x - y).abs() <= 1e-9 * (1.0 + x.abs()));
            }
        }
    }
}
