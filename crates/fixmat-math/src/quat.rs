//! Quaternion type for rotations.
//!
//! A [`Quaternion`] is a scalar part `w` plus a 3-vector part `v`. Rotation
//! use expects unit length; the type does not enforce it, call
//! [`Quaternion::normalize`] or [`Quaternion::safe_normalize`] where drift
//! matters.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Quat, Vec3, Vec4};
//!
//! // Quarter turn about Z, angle in radians in the w slot
//! let q = Quat::from_axis_angle(Vec4::new(0.0, 0.0, 1.0, std::f32::consts::FRAC_PI_2));
//! let p = q.rotate_vector(Vec3::X);
//! assert!((p - Vec3::Y).length() < 1e-6);
//!
//! // Composition with the Hamilton product
//! let half_turn = q * q;
//! assert!((half_turn.rotate_vector(Vec3::X) + Vec3::X).length() < 1e-6);
//! ```

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use fixmat_core::{Error, Result, Scalar, deg_to_rad};

use crate::{Matrix, Vector};

/// A quaternion `w + v`, with `v = (i, j, k)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<S = f32> {
    /// Scalar part.
    pub w: S,
    /// Vector part.
    pub v: Vector<3, S>,
}

impl<S: Scalar> Quaternion<S> {
    /// Identity rotation `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self {
        w: S::ONE,
        v: Vector::<3, S>::ZERO,
    };

    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(w: S, i: S, j: S, k: S) -> Self {
        Self {
            w,
            v: Vector::<3, S>::new(i, j, k),
        }
    }

    /// Creates a quaternion from scalar and vector parts.
    #[inline]
    pub const fn from_parts(w: S, v: Vector<3, S>) -> Self {
        Self { w, v }
    }

    /// Pure quaternion `(0, p)`.
    #[inline]
    pub fn from_vector(p: Vector<3, S>) -> Self {
        Self { w: S::ZERO, v: p }
    }

    /// Creates from `[w, i, j, k]`.
    #[inline]
    pub fn from_array(a: [S; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Returns `[w, i, j, k]`.
    #[inline]
    pub fn to_array(self) -> [S; 4] {
        [self.w, self.v[0], self.v[1], self.v[2]]
    }

    /// Rotation from an axis-angle 4-vector `(x, y, z, angle)`, angle in radians.
    ///
    /// An angle whose half-cosine is within epsilon of ±1 collapses to the
    /// identity, as does a zero axis. The result always has `w >= 0`.
    pub fn from_axis_angle(axis_angle: Vector<4, S>) -> Self {
        let half = S::HALF * axis_angle.w();
        let mut w = half.cos();
        if w.abs().within_epsilon(S::ONE) {
            return Self::IDENTITY;
        }
        let axis = axis_angle.truncate();
        let len = axis.length();
        if len == S::ZERO {
            return Self::IDENTITY;
        }
        let mut s = half.sin();
        if w < S::ZERO {
            w = -w;
            s = -s;
        }
        Self { w, v: axis * (s / len) }
    }

    /// Rotation of `degrees` about `axis`.
    ///
    /// The axis is normalized when non-zero; a zero axis leaves `v` zero.
    pub fn from_degrees(degrees: S, axis: Vector<3, S>) -> Self {
        let (s, c) = (deg_to_rad(degrees) * S::HALF).sin_cos();
        let len = axis.length();
        let v = if len == S::ZERO { axis } else { axis * (s / len) };
        Self { w: c, v }
    }

    /// Overwrites `self` with the identity.
    #[inline]
    pub fn load_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.w * rhs.w + self.v.dot(rhs.v)
    }

    /// Length, `sqrt(dot(self, self))`.
    #[inline]
    pub fn length(self) -> S {
        self.dot(self).sqrt()
    }

    /// Returns the quaternion scaled to unit length (debug-asserted non-zero).
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        debug_assert!(len != S::ZERO, "normalize: zero quaternion");
        self / len
    }

    /// Returns the quaternion scaled to unit length, or an error for zero.
    pub fn try_normalize(self) -> Result<Self> {
        let len = self.length();
        if len == S::ZERO {
            return Err(Error::divide_by_zero("quaternion normalize"));
        }
        Ok(self * (S::ONE / len))
    }

    /// Normalizes in place and returns the scale factor; zero stays zero.
    pub fn safe_normalize(&mut self) -> S {
        let len = self.length();
        if len == S::ZERO {
            return S::ZERO;
        }
        let m = S::ONE / len;
        *self *= m;
        m
    }

    /// Conjugate `(w, -v)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self { w: self.w, v: -self.v }
    }

    /// Multiplicative inverse, `conjugate / dot(self, self)`.
    ///
    /// Undefined for the zero quaternion (asserted in debug builds).
    #[inline]
    pub fn inverse(self) -> Self {
        let d = self.dot(self);
        debug_assert!(d != S::ZERO, "inverse of zero quaternion");
        self.conjugate() / d
    }

    /// Multiplicative inverse, or an error for the zero quaternion.
    pub fn try_inverse(self) -> Result<Self> {
        let d = self.dot(self);
        if d == S::ZERO {
            return Err(Error::divide_by_zero("quaternion inverse"));
        }
        Ok(self.conjugate() * (S::ONE / d))
    }

    /// Rotates `p` by this quaternion, `q * (0, p) * q⁻¹`.
    #[inline]
    pub fn rotate_vector(self, p: Vector<3, S>) -> Vector<3, S> {
        (self * Self::from_vector(p) * self.inverse()).v
    }

    /// 4x4 rotation matrix for row vectors (`p' = p * M`).
    ///
    /// Assumes unit length. The translation row and column are identity.
    pub fn to_rotation_matrix(self) -> Matrix<4, 4, S> {
        let r = self.w;
        let [i, j, k] = self.v.data;
        let (one, two) = (S::ONE, S::TWO);
        let zero = S::ZERO;

        Matrix::from_rows([
            [
                one - two * (j * j + k * k),
                two * (i * j + k * r),
                two * (k * i - j * r),
                zero,
            ],
            [
                two * (i * j - k * r),
                one - two * (k * k + i * i),
                two * (j * k + i * r),
                zero,
            ],
            [
                two * (k * i + j * r),
                two * (j * k - i * r),
                one - two * (j * j + i * i),
                zero,
            ],
            [zero, zero, zero, one],
        ])
    }
}

impl<S: Scalar> Default for Quaternion<S> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<S: Scalar> Neg for Quaternion<S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self { w: -self.w, v: -self.v }
    }
}

impl<S: Scalar> Add for Quaternion<S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            w: self.w + rhs.w,
            v: self.v + rhs.v,
        }
    }
}

impl<S: Scalar> Sub for Quaternion<S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            w: self.w - rhs.w,
            v: self.v - rhs.v,
        }
    }
}

impl<S: Scalar> AddAssign for Quaternion<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Quaternion<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Hamilton product
impl<S: Scalar> Mul for Quaternion<S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.v.dot(rhs.v),
            v: rhs.v * self.w + self.v * rhs.w + self.v.cross(rhs.v),
        }
    }
}

impl<S: Scalar> Mul<S> for Quaternion<S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self {
            w: self.w * rhs,
            v: self.v * rhs,
        }
    }
}

impl<S: Scalar> MulAssign<S> for Quaternion<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> Div<S> for Quaternion<S> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: S) -> Self {
        debug_assert!(rhs != S::ZERO, "quaternion division by zero");
        Self {
            w: self.w / rhs,
            v: self.v / rhs,
        }
    }
}

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;

            #[inline]
            fn mul(self, rhs: Quaternion<$t>) -> Quaternion<$t> {
                rhs * self
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DQuat, DVec3, DVec4, Quat, Vec3, Vec4};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-12, "{a:?} != {b:?}");
    }

    #[test]
    fn test_hamilton_basis() {
        let i = DQuat::new(0.0, 1.0, 0.0, 0.0);
        let j = DQuat::new(0.0, 0.0, 1.0, 0.0);
        let k = DQuat::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, DQuat::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_conjugate_inverse() {
        let q = DQuat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), DQuat::new(1.0, -2.0, -3.0, -4.0));
        let p = q * q.inverse();
        assert_relative_eq!(p.w, 1.0, epsilon = 1e-12);
        assert!(p.v.length() < 1e-12);
        assert!(DQuat::new(0.0, 0.0, 0.0, 0.0).try_inverse().is_err());
    }

    #[test]
    fn test_normalize() {
        let q = Quat::new(1.0, 1.0, 1.0, 1.0).normalize();
        assert_relative_eq!(q.length(), 1.0, epsilon = 1e-6);

        let mut z = Quat::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(z.safe_normalize(), 0.0);
        assert_eq!(z, Quat::new(0.0, 0.0, 0.0, 0.0));
        assert!(z.try_normalize().is_err());
    }

    #[test]
    fn test_axis_angle_identity_collapse() {
        assert_eq!(Quat::from_axis_angle(Vec4::new(1.0, 0.0, 0.0, 0.0)), Quat::IDENTITY);
        // Full turn: cos(pi) = -1
        let q = DQuat::from_axis_angle(DVec4::new(0.0, 1.0, 0.0, 2.0 * PI));
        assert_eq!(q, DQuat::IDENTITY);
        // Zero axis
        assert_eq!(DQuat::from_axis_angle(DVec4::new(0.0, 0.0, 0.0, 1.0)), DQuat::IDENTITY);
    }

    #[test]
    fn test_axis_angle_non_negative_w() {
        // 270 degrees flips to -90 degrees about the same axis
        let q = DQuat::from_axis_angle(DVec4::new(0.0, 0.0, 2.0, 1.5 * PI));
        assert!(q.w > 0.0);
        assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);
        assert_vec_close(q.rotate_vector(DVec3::X), -DVec3::Y);
    }

    #[test]
    fn test_from_degrees() {
        let q = Quat::from_degrees(90.0, Vec3::new(0.0, 0.0, 5.0));
        let p = q.rotate_vector(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_rotation_matrix_matches_rotate_vector() {
        let q = DQuat::from_axis_angle(DVec4::new(1.0, 2.0, 3.0, 0.7));
        let m = q.to_rotation_matrix();
        let p = DVec3::new(0.3, -1.2, 2.0);
        let by_matrix = DVec3::from(DVec4::direction(p) * m);
        assert_vec_close(by_matrix, q.rotate_vector(p));
    }

    #[test]
    fn test_rotation_matrix_z_quarter_turn() {
        let q = DQuat::from_axis_angle(DVec4::new(0.0, 0.0, 1.0, FRAC_PI_2));
        let m = q.to_rotation_matrix();
        // Row 0 is the image of X
        assert_vec_close(DVec3::new(m[0][0], m[0][1], m[0][2]), DVec3::Y);
        assert_eq!(m[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * 2.0, 2.0 * q);
        assert_eq!((q * 2.0) / 2.0, q);
        assert_eq!(q + q - q, q);
        assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Quat::from_array(q.to_array()), q);
    }
}
