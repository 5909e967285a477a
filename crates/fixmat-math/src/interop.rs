//! Conversions to and from [`glam`] types.
//!
//! glam is column-major with column vectors; fixmat is row-major with row
//! vectors. The two transposes cancel: the rows of a fixmat matrix are the
//! columns of the equivalent glam matrix, so conversion copies the 2D array
//! as is.
//!
//! ```rust
//! use fixmat_math::{Mat4, Vec3, Vec4};
//!
//! let m = Mat4::from_rows([
//!     [1.0, 0.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0, 0.0],
//!     [5.0, 6.0, 7.0, 1.0],
//! ]);
//! let g: glam::Mat4 = m.into();
//! assert_eq!(g.transform_point3(glam::Vec3::ZERO), glam::Vec3::new(5.0, 6.0, 7.0));
//!
//! let p = Vec4::point(Vec3::ZERO) * m;
//! assert_eq!(glam::Vec4::from(p), g * glam::Vec4::W);
//! ```

use crate::{Matrix, Quaternion, Vector};

macro_rules! impl_vector_conv {
    ($n:literal, $s:ty, $g:ty) => {
        impl From<Vector<$n, $s>> for $g {
            #[inline]
            fn from(v: Vector<$n, $s>) -> Self {
                <$g>::from_array(v.data)
            }
        }

        impl From<$g> for Vector<$n, $s> {
            #[inline]
            fn from(v: $g) -> Self {
                Vector::from_array(v.to_array())
            }
        }
    };
}

impl_vector_conv!(2, f32, ::glam::Vec2);
impl_vector_conv!(3, f32, ::glam::Vec3);
impl_vector_conv!(4, f32, ::glam::Vec4);
impl_vector_conv!(2, f64, ::glam::DVec2);
impl_vector_conv!(3, f64, ::glam::DVec3);
impl_vector_conv!(4, f64, ::glam::DVec4);

macro_rules! impl_matrix_conv {
    ($n:literal, $s:ty, $g:ty) => {
        impl From<Matrix<$n, $n, $s>> for $g {
            #[inline]
            fn from(m: Matrix<$n, $n, $s>) -> Self {
                <$g>::from_cols_array_2d(&m.m)
            }
        }

        impl From<$g> for Matrix<$n, $n, $s> {
            #[inline]
            fn from(m: $g) -> Self {
                Matrix::from_rows(m.to_cols_array_2d())
            }
        }
    };
}

impl_matrix_conv!(2, f32, ::glam::Mat2);
impl_matrix_conv!(3, f32, ::glam::Mat3);
impl_matrix_conv!(4, f32, ::glam::Mat4);
impl_matrix_conv!(2, f64, ::glam::DMat2);
impl_matrix_conv!(3, f64, ::glam::DMat3);
impl_matrix_conv!(4, f64, ::glam::DMat4);

macro_rules! impl_quat_conv {
    ($s:ty, $g:ty) => {
        impl From<Quaternion<$s>> for $g {
            #[inline]
            fn from(q: Quaternion<$s>) -> Self {
                <$g>::from_xyzw(q.v[0], q.v[1], q.v[2], q.w)
            }
        }

        impl From<$g> for Quaternion<$s> {
            #[inline]
            fn from(q: $g) -> Self {
                let [x, y, z, w] = q.to_array();
                Quaternion::new(w, x, y, z)
            }
        }
    };
}

impl_quat_conv!(f32, ::glam::Quat);
impl_quat_conv!(f64, ::glam::DQuat);
