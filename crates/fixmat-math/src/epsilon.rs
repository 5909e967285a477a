//! Scale-aware approximate equality.
//!
//! Exact `==` is the default equality for every value type. [`WithinEpsilon`]
//! is the tolerant comparison used where accumulated rounding is expected,
//! built on [`Scalar::within_epsilon`]:
//!
//! - Vectors compare lengths first, then each component scaled by the larger
//!   length.
//! - Square matrices compare determinants first, then each row scaled by the
//!   larger absolute determinant (or unscaled if both determinants are zero).
//! - Quaternions compare as 4-vectors `(w, i, j, k)`.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Vec3, WithinEpsilon};
//!
//! let a = Vec3::new(1000.0, 0.0, 0.0);
//! let b = Vec3::new(1000.001, 0.0, 0.0);
//! assert!(a.within_epsilon(&b));
//! assert!(!a.within_epsilon(&Vec3::new(1001.0, 0.0, 0.0)));
//! ```

use fixmat_core::Scalar;

use crate::{Matrix, Quaternion, Vector};

/// Approximate equality relative to the magnitude of the operands.
pub trait WithinEpsilon {
    /// Returns true if `self` and `other` agree within the scalar tolerance.
    fn within_epsilon(&self, other: &Self) -> bool;
}

impl<const N: usize, S: Scalar> WithinEpsilon for Vector<N, S> {
    fn within_epsilon(&self, other: &Self) -> bool {
        let la = self.length();
        let lb = other.length();
        if !la.within_epsilon(lb) {
            return false;
        }
        let l = if la > lb { la } else { lb };
        if l == S::ZERO {
            return true;
        }
        let inv = S::ONE / l;
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a * inv).within_epsilon(b * inv))
    }
}

impl<const N: usize, S: Scalar> WithinEpsilon for Matrix<N, N, S> {
    fn within_epsilon(&self, other: &Self) -> bool {
        let da = self.determinant();
        let db = other.determinant();
        if !da.within_epsilon(db) {
            return false;
        }
        let d = if da.abs() > db.abs() { da.abs() } else { db.abs() };
        // Singular matrices can agree on det and still differ wildly
        let scale = if d == S::ZERO { S::ONE } else { S::ONE / d };
        (0..N).all(|i| (self.row(i) * scale).within_epsilon(&(other.row(i) * scale)))
    }
}

impl<S: Scalar> WithinEpsilon for Quaternion<S> {
    fn within_epsilon(&self, other: &Self) -> bool {
        Vector::from_array(self.to_array()).within_epsilon(&Vector::from_array(other.to_array()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DMat3, Mat2, Quat, Vec2, Vec3};

    #[test]
    fn test_vector_relative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert!(a.within_epsilon(&(a * (1.0 + 1e-7))));
        assert!(!a.within_epsilon(&(a * 1.01)));
        assert!(Vec3::ZERO.within_epsilon(&Vec3::ZERO));
    }

    #[test]
    fn test_vector_small_component_against_zero() {
        // Components are compared after scaling by the length
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(1.0, 1e-7);
        assert!(a.within_epsilon(&b));
    }

    #[test]
    fn test_matrix() {
        let m = DMat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        let product = m * m.inverse().unwrap();
        assert!(product.within_epsilon(&DMat3::identity()));
        assert!(!m.within_epsilon(&(m * 2.0)));
    }

    #[test]
    fn test_singular_matrices_compare_rows() {
        let a = Mat2::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        let b = Mat2::from_rows([[3.0, 6.0], [1.0, 2.0]]);
        assert_eq!(a.determinant(), 0.0);
        assert_eq!(b.determinant(), 0.0);
        assert!(!a.within_epsilon(&b));
        assert!(a.within_epsilon(&a));
    }

    #[test]
    fn test_quaternion() {
        let q = Quat::new(0.5, 0.5, 0.5, 0.5);
        assert!(q.within_epsilon(&(q * (1.0 - 1e-7))));
        assert!(!q.within_epsilon(&-q));
    }
}
