//! Fixed-size matrix type.
//!
//! [`Matrix`] holds `R` rows of `C` scalars in one contiguous row-major
//! array. Square matrices gain identity, determinant, adjoint and inverse in
//! [`crate::square`].
//!
//! # Convention
//!
//! Matrices are stored **row-major** and act on **row vectors** from the
//! right (`v' = v * M`), so a 4x4 transform keeps its translation in row 3:
//!
//! ```text
//! | m00 m01 m02 0 |
//! | m10 m11 m12 0 |
//! | m20 m21 m22 0 |
//! | tx  ty  tz  1 |
//! ```
//!
//! The flat row-major array of such a matrix is identical to the
//! column-major array of the equivalent column-vector matrix, so
//! [`Matrix::as_slice`] can be uploaded as a GL uniform with
//! `transpose = false`.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Mat2x3, Mat3x2, Mat2, Vec3};
//!
//! let a = Mat2x3::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//! ]);
//! let b: Mat3x2 = a.transpose();
//!
//! // Inner dimensions are checked by the type system
//! let c: Mat2 = a * b;
//! assert_eq!(c.m[0][0], 14.0);
//!
//! // Column vector product: each row dotted with the vector
//! let v = a * Vec3::new(1.0, 1.0, 1.0);
//! assert_eq!(v.to_array(), [6.0, 15.0]);
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use fixmat_core::{Error, Result, Scalar};

use crate::Vector;

/// An `R` x `C` matrix.
///
/// # Example
///
/// ```rust
/// use fixmat_math::{Mat4, Vec4};
///
/// let m = Mat4::identity();
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(v * m, v);
/// assert_eq!(m.as_slice().len(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix<const R: usize, const C: usize, S = f32> {
    /// Matrix elements in row-major order: `m[row][col]`.
    pub m: [[S; C]; R],
}

impl<const R: usize, const C: usize, S: Scalar> Matrix<R, C, S> {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        m: [[S::ZERO; C]; R],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[S; C]; R]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from row vectors.
    #[inline]
    pub fn from_row_vectors(rows: [Vector<C, S>; R]) -> Self {
        Self {
            m: rows.map(|r| r.data),
        }
    }

    /// Creates a matrix from column vectors.
    #[inline]
    pub fn from_column_vectors(cols: [Vector<R, S>; C]) -> Self {
        Self::from_fn(|i, j| cols[j].data[i])
    }

    /// Creates a matrix by calling `f(row, col)` for every element.
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> S>(mut f: F) -> Self {
        Self {
            m: std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))),
        }
    }

    /// Creates a matrix from a flat row-major slice of exactly `R * C` elements.
    pub fn from_slice(values: &[S]) -> Result<Self> {
        if values.len() != R * C {
            return Err(Error::dimension_mismatch(R * C, values.len()));
        }
        Ok(Self::from_fn(|i, j| values[i * C + j]))
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Returns row `i` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<C, S> {
        Vector::from_array(self.m[i])
    }

    /// Returns column `j` as a vector.
    #[inline]
    pub fn column(&self, j: usize) -> Vector<R, S> {
        Vector::from_fn(|i| self.m[i][j])
    }

    /// Replaces row `i`.
    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vector<C, S>) {
        self.m[i] = row.data;
    }

    /// Replaces column `j`.
    #[inline]
    pub fn set_column(&mut self, j: usize, col: Vector<R, S>) {
        for (row, &v) in self.m.iter_mut().zip(col.data.iter()) {
            row[j] = v;
        }
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Matrix<C, R, S> {
        Matrix::from_fn(|i, j| self.m[j][i])
    }

    /// Elements as a flat row-major slice of `R * C` scalars.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        self.m.as_flattened()
    }

    /// Elements as a mutable flat row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        self.m.as_flattened_mut()
    }

    /// Pointer to the first element, valid for `R * C` reads.
    ///
    /// Intended for graphics APIs that take a raw uniform pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const S {
        self.as_slice().as_ptr()
    }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<F: FnMut(S) -> S>(&self, mut f: F) -> Self {
        Self {
            m: self.m.map(|row| row.map(&mut f)),
        }
    }

    /// Scalar division that reports a zero divisor instead of producing inf/nan.
    pub fn checked_div(&self, rhs: S) -> Result<Self> {
        if rhs == S::ZERO {
            return Err(Error::divide_by_zero("matrix division"));
        }
        Ok(self.map(|c| c / rhs))
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|x| x.is_finite())
    }
}

impl<const R: usize, const C: usize, S: Scalar> From<[[S; C]; R]> for Matrix<R, C, S> {
    #[inline]
    fn from(rows: [[S; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const R: usize, const C: usize, S> Index<usize> for Matrix<R, C, S> {
    type Output = [S; C];

    #[inline]
    fn index(&self, i: usize) -> &[S; C] {
        &self.m[i]
    }
}

impl<const R: usize, const C: usize, S> IndexMut<usize> for Matrix<R, C, S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [S; C] {
        &mut self.m[i]
    }
}

impl<const R: usize, const C: usize, S: Scalar> Add for Matrix<R, C, S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.m[i][j] + rhs.m[i][j])
    }
}

impl<const R: usize, const C: usize, S: Scalar> Sub for Matrix<R, C, S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.m[i][j] - rhs.m[i][j])
    }
}

impl<const R: usize, const C: usize, S: Scalar> AddAssign for Matrix<R, C, S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const R: usize, const C: usize, S: Scalar> SubAssign for Matrix<R, C, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const R: usize, const C: usize, S: Scalar> Neg for Matrix<R, C, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

// Matrix * scalar
impl<const R: usize, const C: usize, S: Scalar> Mul<S> for Matrix<R, C, S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: S) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<const R: usize, const C: usize, S: Scalar> MulAssign<S> for Matrix<R, C, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<const R: usize, const C: usize, S: Scalar> Div<S> for Matrix<R, C, S> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: S) -> Self {
        debug_assert!(rhs != S::ZERO, "matrix division by zero");
        self.map(|c| c / rhs)
    }
}

impl<const R: usize, const C: usize, S: Scalar> DivAssign<S> for Matrix<R, C, S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

// Matrix * Matrix
impl<const R: usize, const K: usize, const C: usize, S: Scalar> Mul<Matrix<K, C, S>>
    for Matrix<R, K, S>
{
    type Output = Matrix<R, C, S>;

    #[inline]
    fn mul(self, rhs: Matrix<K, C, S>) -> Matrix<R, C, S> {
        Matrix::from_fn(|i, j| (0..K).fold(S::ZERO, |acc, k| acc + self.m[i][k] * rhs.m[k][j]))
    }
}

impl<const N: usize, S: Scalar> MulAssign<Matrix<N, N, S>> for Matrix<N, N, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Matrix * column vector
impl<const R: usize, const C: usize, S: Scalar> Mul<Vector<C, S>> for Matrix<R, C, S> {
    type Output = Vector<R, S>;

    #[inline]
    fn mul(self, rhs: Vector<C, S>) -> Vector<R, S> {
        Vector::from_fn(|i| self.row(i).dot(rhs))
    }
}

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl<const R: usize, const C: usize> Mul<Matrix<R, C, $t>> for $t {
            type Output = Matrix<R, C, $t>;

            #[inline]
            fn mul(self, rhs: Matrix<R, C, $t>) -> Matrix<R, C, $t> {
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
    use crate::{Mat2x3, Mat3, Mat3x2, Mat4, Vec2, Vec3};

    fn sample() -> Mat2x3 {
        Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn test_rows_and_columns() {
        let m = sample();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.column(2), Vec2::new(3.0, 6.0));
        assert_eq!(m[1][0], 4.0);
    }

    #[test]
    fn test_set_row_column() {
        let mut m = sample();
        m.set_row(0, Vec3::splat(9.0));
        m.set_column(1, Vec2::new(-1.0, -2.0));
        assert_eq!(m.m, [[9.0, -1.0, 9.0], [4.0, -2.0, 6.0]]);
    }

    #[test]
    fn test_transpose() {
        let t: Mat3x2 = sample().transpose();
        assert_eq!(t.m, [[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn test_flat_layout_is_row_major() {
        let m = sample();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let mut n = m;
        n.as_mut_slice()[4] = 0.0;
        assert_eq!(n.m[1][1], 0.0);
        assert_eq!(Mat2x3::from_slice(m.as_slice()).unwrap(), m);
        assert!(Mat2x3::from_slice(&[1.0; 5]).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let m = sample();
        assert_eq!((m + m).m, (m * 2.0).m);
        assert_eq!(m - m, Mat2x3::ZERO);
        assert_eq!(-m + m, Mat2x3::ZERO);
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!((m * 4.0) / 4.0, m);
        assert!(m.checked_div(0.0).is_err());
    }

    #[test]
    fn test_mul_non_square() {
        let a = sample();
        let b = a.transpose();
        let ab = a * b;
        assert_eq!(ab.m, [[14.0, 32.0], [32.0, 77.0]]);
        let ba: Mat3 = b * a;
        assert_eq!(ba.m[0], [17.0, 22.0, 27.0]);
    }

    #[test]
    fn test_mul_vector() {
        let v = sample() * Vec3::new(1.0, 0.0, -1.0);
        assert_eq!(v, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn test_mul_assign_square() {
        let mut m = Mat4::identity() * 2.0;
        m *= Mat4::identity() * 3.0;
        assert_eq!(m, Mat4::identity() * 6.0);
    }

    #[test]
    fn test_from_vectors() {
        let by_rows = Mat2x3::from_row_vectors([Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(by_rows, sample());
        let by_cols = Mat2x3::from_column_vectors([
            Vec2::new(1.0, 4.0),
            Vec2::new(2.0, 5.0),
            Vec2::new(3.0, 6.0),
        ]);
        assert_eq!(by_cols, sample());
    }
}
