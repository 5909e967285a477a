//! Fixed-size vector type.
//!
//! [`Vector`] is an N-tuple of [`Scalar`]s stored as a plain array. Named
//! components (`x`, `y`, `z`, `w`) are accessor methods over that array for
//! N = 2, 3 and 4; there is no second copy of the data.
//!
//! # Convention
//!
//! Vectors are **row vectors**: they multiply matrices from the left.
//!
//! ```text
//!                 | m00 m01 |
//! | x y |   *     | m10 m11 |   =   | x*m00 + y*m10   x*m01 + y*m11 |
//! ```
//!
//! 4-vectors follow the homogeneous convention: `w = 1` for points and
//! `w = 0` for directions.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Vec3, Vec4};
//!
//! let v = Vec3::new(3.0, 0.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let n = v.normalize();
//! assert!((n.length() - 1.0).abs() < 1e-6);
//!
//! // Point to homogeneous and back
//! let p = v.extend(1.0);
//! assert_eq!(p, Vec4::new(3.0, 0.0, 4.0, 1.0));
//! assert_eq!(Vec3::from_homogeneous(Vec4::new(2.0, 4.0, 6.0, 2.0), false), Vec3::new(1.0, 2.0, 3.0));
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use fixmat_core::{Error, Result, Scalar};

use crate::Matrix;

/// An N-component vector.
///
/// Indexing is always bounds checked. Equality is exact per component; use
/// [`WithinEpsilon`](crate::WithinEpsilon) for tolerant comparison.
///
/// # Example
///
/// ```rust
/// use fixmat_math::Vector;
///
/// let v = Vector::<5, f64>::from_fn(|i| i as f64);
/// assert_eq!(v[4], 4.0);
/// assert_eq!(v.dot(v), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vector<const N: usize, S = f32> {
    /// Components in order.
    pub data: [S; N],
}

impl<const N: usize, S: Scalar> Vector<N, S> {
    /// All components zero.
    pub const ZERO: Self = Self { data: [S::ZERO; N] };

    /// All components one.
    pub const ONE: Self = Self { data: [S::ONE; N] };

    /// Creates a vector from an array.
    #[inline]
    pub const fn from_array(data: [S; N]) -> Self {
        Self { data }
    }

    /// Creates a vector with every component set to `v`.
    #[inline]
    pub fn splat(v: S) -> Self {
        Self { data: [v; N] }
    }

    /// Creates a vector by calling `f` with each component index.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> S>(f: F) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Creates a vector from a slice of exactly `N` elements.
    pub fn from_slice(values: &[S]) -> Result<Self> {
        let data: [S; N] = values
            .try_into()
            .map_err(|_| Error::dimension_mismatch(N, values.len()))?;
        Ok(Self { data })
    }

    /// Number of components.
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [S; N] {
        self.data
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// Components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.data
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<F: FnMut(S) -> S>(self, f: F) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    #[inline]
    fn zip_map<F: FnMut(S, S) -> S>(self, rhs: Self, mut f: F) -> Self {
        Self::from_fn(|i| f(self.data[i], rhs.data[i]))
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(S::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> S {
        self.dot(self)
    }

    /// Euclidean length, `sqrt(dot(self, self))`.
    #[inline]
    pub fn length(self) -> S {
        self.dot(self).sqrt()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, rhs: Self) -> S {
        (self - rhs).length()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The length must be non-zero; this is asserted in debug builds only.
    /// Use [`try_normalize`](Self::try_normalize) or
    /// [`safe_normalize`](Self::safe_normalize) when the input may be zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        debug_assert!(len != S::ZERO, "normalize: zero-length vector");
        self / len
    }

    /// Returns the vector scaled to unit length, or an error for a zero vector.
    pub fn try_normalize(self) -> Result<Self> {
        let len = self.length();
        if len == S::ZERO {
            return Err(Error::divide_by_zero("vector normalize"));
        }
        Ok(self * (S::ONE / len))
    }

    /// Normalizes in place and returns the scale factor applied.
    ///
    /// A zero vector is left unchanged and `0` is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixmat_math::Vec2;
    ///
    /// let mut v = Vec2::new(0.0, 2.0);
    /// assert_eq!(v.safe_normalize(), 0.5);
    /// assert_eq!(v, Vec2::new(0.0, 1.0));
    ///
    /// let mut z = Vec2::ZERO;
    /// assert_eq!(z.safe_normalize(), 0.0);
    /// assert_eq!(z, Vec2::ZERO);
    /// ```
    pub fn safe_normalize(&mut self) -> S {
        let src = *self;
        self.safe_normalize_from(src)
    }

    /// Overwrites `self` with `src` scaled to unit length and returns the
    /// scale factor.
    ///
    /// If `src` has zero length, `self` is left unchanged and `0` is returned.
    pub fn safe_normalize_from(&mut self, src: Self) -> S {
        let len = src.length();
        if len == S::ZERO {
            return S::ZERO;
        }
        let m = S::ONE / len;
        *self = src * m;
        m
    }

    /// Projection of `self` onto `u`: `u * (dot(self, u) / dot(u, u))`.
    #[inline]
    pub fn projection_onto(self, u: Self) -> Self {
        u * (self.dot(u) / u.dot(u))
    }

    /// Scalar division that reports a zero divisor instead of producing inf/nan.
    pub fn checked_div(self, rhs: S) -> Result<Self> {
        if rhs == S::ZERO {
            return Err(Error::divide_by_zero("vector division"));
        }
        Ok(self.map(|c| c / rhs))
    }

    /// Linear interpolation, `self * (1 - t) + rhs * t`.
    #[inline]
    pub fn lerp(self, rhs: Self, t: S) -> Self {
        self * (S::ONE - t) + rhs * t
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| if b < a { b } else { a })
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| if b > a { b } else { a })
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(S::abs)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }
}

impl<S: Scalar> Vector<2, S> {
    /// Unit X (1, 0).
    pub const X: Self = Self::new(S::ONE, S::ZERO);
    /// Unit Y (0, 1).
    pub const Y: Self = Self::new(S::ZERO, S::ONE);

    /// Creates a 2-vector.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Mutable X component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut S {
        &mut self.data[0]
    }

    /// Mutable Y component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut S {
        &mut self.data[1]
    }

    /// Appends a Z component.
    #[inline]
    pub fn extend(self, z: S) -> Vector<3, S> {
        Vector::<3, S>::new(self.data[0], self.data[1], z)
    }

    /// Converts a homogeneous 4-vector.
    ///
    /// Divides by `w` unless `w` is 0 or 1, or `truncate` is set.
    pub fn from_homogeneous(v: Vector<4, S>, truncate: bool) -> Self {
        let xy = Self::new(v.data[0], v.data[1]);
        let w = v.data[3];
        if truncate || w == S::ZERO || w == S::ONE {
            xy
        } else {
            xy / w
        }
    }
}

impl<S: Scalar> Vector<3, S> {
    /// Unit X (1, 0, 0).
    pub const X: Self = Self::new(S::ONE, S::ZERO, S::ZERO);
    /// Unit Y (0, 1, 0).
    pub const Y: Self = Self::new(S::ZERO, S::ONE, S::ZERO);
    /// Unit Z (0, 0, 1).
    pub const Z: Self = Self::new(S::ZERO, S::ZERO, S::ONE);

    /// Creates a 3-vector.
    #[inline]
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Mutable X component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut S {
        &mut self.data[0]
    }

    /// Mutable Y component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut S {
        &mut self.data[1]
    }

    /// Mutable Z component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut S {
        &mut self.data[2]
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = rhs.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends a W component (1 for points, 0 for directions).
    #[inline]
    pub fn extend(self, w: S) -> Vector<4, S> {
        Vector::<4, S>::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Drops the Z component.
    #[inline]
    pub fn truncate(self) -> Vector<2, S> {
        Vector::<2, S>::new(self.data[0], self.data[1])
    }

    /// Converts a homogeneous 4-vector.
    ///
    /// Divides by `w` unless `w` is 0 or 1, or `truncate` is set.
    pub fn from_homogeneous(v: Vector<4, S>, truncate: bool) -> Self {
        let xyz = v.truncate();
        let w = v.data[3];
        if truncate || w == S::ZERO || w == S::ONE {
            xyz
        } else {
            xyz / w
        }
    }
}

impl<S: Scalar> Vector<4, S> {
    /// Unit X (1, 0, 0, 0).
    pub const X: Self = Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO);
    /// Unit Y (0, 1, 0, 0).
    pub const Y: Self = Self::new(S::ZERO, S::ONE, S::ZERO, S::ZERO);
    /// Unit Z (0, 0, 1, 0).
    pub const Z: Self = Self::new(S::ZERO, S::ZERO, S::ONE, S::ZERO);
    /// Unit W (0, 0, 0, 1).
    pub const W: Self = Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE);

    /// Creates a 4-vector.
    #[inline]
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Homogeneous point `(p, 1)`.
    #[inline]
    pub fn point(p: Vector<3, S>) -> Self {
        p.extend(S::ONE)
    }

    /// Homogeneous direction `(d, 0)`.
    #[inline]
    pub fn direction(d: Vector<3, S>) -> Self {
        d.extend(S::ZERO)
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// W component.
    #[inline]
    pub fn w(&self) -> S {
        self.data[3]
    }

    /// Mutable X component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut S {
        &mut self.data[0]
    }

    /// Mutable Y component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut S {
        &mut self.data[1]
    }

    /// Mutable Z component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut S {
        &mut self.data[2]
    }

    /// Mutable W component.
    #[inline]
    pub fn w_mut(&mut self) -> &mut S {
        &mut self.data[3]
    }

    /// Drops the W component without dividing.
    #[inline]
    pub fn truncate(self) -> Vector<3, S> {
        Vector::<3, S>::new(self.data[0], self.data[1], self.data[2])
    }
}

impl<const N: usize, S: Scalar> Default for Vector<N, S> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize, S: Scalar> From<[S; N]> for Vector<N, S> {
    #[inline]
    fn from(data: [S; N]) -> Self {
        Self { data }
    }
}

impl<const N: usize, S: Scalar> From<Vector<N, S>> for [S; N] {
    #[inline]
    fn from(v: Vector<N, S>) -> Self {
        v.data
    }
}

/// Truncating conversion: drops `w` without dividing.
impl<S: Scalar> From<Vector<4, S>> for Vector<3, S> {
    #[inline]
    fn from(v: Vector<4, S>) -> Self {
        Self::from_homogeneous(v, true)
    }
}

/// Dividing conversion: divides by `w` unless it is 0 or 1.
impl<S: Scalar> From<Vector<4, S>> for Vector<2, S> {
    #[inline]
    fn from(v: Vector<4, S>) -> Self {
        Self::from_homogeneous(v, false)
    }
}

impl<const N: usize, S> Index<usize> for Vector<N, S> {
    type Output = S;

    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.data[i]
    }
}

impl<const N: usize, S> IndexMut<usize> for Vector<N, S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        &mut self.data[i]
    }
}

impl<const N: usize, S: Scalar> Add for Vector<N, S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<const N: usize, S: Scalar> Sub for Vector<N, S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<const N: usize, S: Scalar> AddAssign for Vector<N, S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize, S: Scalar> SubAssign for Vector<N, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize, S: Scalar> Neg for Vector<N, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize, S: Scalar> Mul<S> for Vector<N, S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: S) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<const N: usize, S: Scalar> MulAssign<S> for Vector<N, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<const N: usize, S: Scalar> Div<S> for Vector<N, S> {
    type Output = Self;

    /// Divides every component by `rhs`; a zero divisor asserts in debug builds.
    #[inline]
    fn div(self, rhs: S) -> Self {
        debug_assert!(rhs != S::ZERO, "vector division by zero");
        self.map(|c| c / rhs)
    }
}

impl<const N: usize, S: Scalar> DivAssign<S> for Vector<N, S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

// Row vector * matrix
impl<const N: usize, const C: usize, S: Scalar> Mul<Matrix<N, C, S>> for Vector<N, S> {
    type Output = Vector<C, S>;

    #[inline]
    fn mul(self, rhs: Matrix<N, C, S>) -> Vector<C, S> {
        Vector::from_fn(|j| {
            (0..N).fold(S::ZERO, |acc, i| acc + self.data[i] * rhs.m[i][j])
        })
    }
}

impl<const N: usize, S: Scalar> MulAssign<Matrix<N, N, S>> for Vector<N, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<N, N, S>) {
        *self = *self * rhs;
    }
}

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl<const N: usize> Mul<Vector<N, $t>> for $t {
            type Output = Vector<N, $t>;

            #[inline]
            fn mul(self, rhs: Vector<N, $t>) -> Vector<N, $t> {
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
    use crate::{Mat3, Vec2, Vec3, Vec4};
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vec3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_dot_length() {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
        assert!(Vec3::ZERO.try_normalize().is_err());
        assert_relative_eq!(v.try_normalize().unwrap().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_safe_normalize_zero() {
        let mut v = Vec3::ZERO;
        assert_eq!(v.safe_normalize(), 0.0);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn test_safe_normalize_from() {
        let mut dst = Vec3::new(9.0, 9.0, 9.0);
        let m = dst.safe_normalize_from(Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(m, 0.25);
        assert_eq!(dst, Vec3::Z);

        let m = dst.safe_normalize_from(Vec3::ZERO);
        assert_eq!(m, 0.0);
        assert_eq!(dst, Vec3::Z);
    }

    #[test]
    fn test_projection_onto() {
        let v = Vec3::new(2.0, 3.0, 0.0);
        let u = Vec3::new(4.0, 0.0, 0.0);
        assert_eq!(v.projection_onto(u), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_checked_div() {
        assert!(Vec2::new(1.0, 2.0).checked_div(0.0).is_err());
        assert_eq!(Vec2::new(1.0, 2.0).checked_div(2.0).unwrap(), Vec2::new(0.5, 1.0));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vec3::ZERO;
        let i = v.dim();
        let _ = v[i];
    }

    #[test]
    fn test_row_vector_times_matrix() {
        // Rows are the images of the basis vectors
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(Vec3::X * m, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::new(1.0, 1.0, 0.0) * m, Vec3::new(5.0, 7.0, 9.0));

        let mut v = Vec3::Z;
        v *= m;
        assert_eq!(v, Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn test_homogeneous_conversion() {
        let p = Vec4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(Vec3::from_homogeneous(p, false), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from_homogeneous(p, true), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec3::from(p), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec2::from(p), Vec2::new(1.0, 2.0));

        // Directions and points pass through untouched
        let d = Vec4::new(2.0, 4.0, 6.0, 0.0);
        assert_eq!(Vec3::from_homogeneous(d, false), Vec3::new(2.0, 4.0, 6.0));
        let q = Vec4::point(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec3::from_homogeneous(q, false), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_named_components() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        *v.w_mut() = 0.0;
        assert_eq!(v[3], 0.0);
        assert_eq!(v.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_slice() {
        let v = Vector::<3, f32>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        let err = Vector::<3, f32>::from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::dimension_mismatch(3, 2));
    }

    #[test]
    fn test_min_max_lerp() {
        let a = Vec2::new(0.0, 4.0);
        let b = Vec2::new(2.0, 2.0);
        assert_eq!(a.min(b), Vec2::new(0.0, 2.0));
        assert_eq!(a.max(b), Vec2::new(2.0, 4.0));
        assert_eq!(a.lerp(b, 0.5), Vec2::new(1.0, 3.0));
        assert_eq!(a.distance(b), 8.0f32.sqrt());
    }
}
