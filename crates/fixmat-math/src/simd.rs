//! SIMD batch transforms.
//!
//! Row-vector products `v * M` for single-precision 4×4 matrices, using the
//! `wide` crate for portable SIMD on stable Rust. Each matrix row is loaded
//! into one `f32x4` lane group and the result is the sum of the rows weighted
//! by the vector components.
//!
//! # Example
//!
//! ```rust
//! use fixmat_math::{Mat4, Vec3};
//! use fixmat_math::simd::transform_points;
//!
//! let mut m = Mat4::identity();
//! m[3] = [1.0, 2.0, 3.0, 1.0];
//!
//! let out = transform_points(&m, &[Vec3::ZERO, Vec3::X]);
//! assert_eq!(out[0], Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(out[1], Vec3::new(2.0, 2.0, 3.0));
//! ```

use wide::f32x4;

use crate::{Mat4, Vec3, Vec4};

#[inline]
fn load_rows(m: &[[f32; 4]; 4]) -> [f32x4; 4] {
    [
        f32x4::from(m[0]),
        f32x4::from(m[1]),
        f32x4::from(m[2]),
        f32x4::from(m[3]),
    ]
}

#[inline]
fn combine(rows: &[f32x4; 4], v: [f32; 4]) -> f32x4 {
    rows[0] * f32x4::splat(v[0])
        + rows[1] * f32x4::splat(v[1])
        + rows[2] * f32x4::splat(v[2])
        + rows[3] * f32x4::splat(v[3])
}

/// Dot product of 4-element arrays.
#[inline]
pub fn dot_x4(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    (f32x4::from(*a) * f32x4::from(*b)).reduce_add()
}

/// Row vector times row-major 4×4 matrix.
///
/// ```rust
/// use fixmat_math::simd::vec4_mul_mat4;
///
/// let m = [
///     [2.0, 0.0, 0.0, 0.0],
///     [0.0, 3.0, 0.0, 0.0],
///     [0.0, 0.0, 4.0, 0.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ];
/// assert_eq!(vec4_mul_mat4(&[1.0, 1.0, 1.0, 1.0], &m), [2.0, 3.0, 4.0, 1.0]);
/// ```
#[inline]
pub fn vec4_mul_mat4(v: &[f32; 4], m: &[[f32; 4]; 4]) -> [f32; 4] {
    combine(&load_rows(m), *v).to_array()
}

/// Transforms homogeneous vectors by `m`.
pub fn transform_vec4s(m: &Mat4, values: &[Vec4]) -> Vec<Vec4> {
    let rows = load_rows(&m.m);
    values
        .iter()
        .map(|v| Vec4::from_array(combine(&rows, v.data).to_array()))
        .collect()
}

/// Transforms points (`w = 1`) by an affine `m`.
///
/// The output `w` is discarded; use [`transform_vec4s`] for projective
/// matrices.
pub fn transform_points(m: &Mat4, points: &[Vec3]) -> Vec<Vec3> {
    let rows = load_rows(&m.m);
    points
        .iter()
        .map(|p| {
            let [x, y, z, _] = combine(&rows, [p[0], p[1], p[2], 1.0]).to_array();
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Transforms directions (`w = 0`) by `m`, ignoring translation.
pub fn transform_directions(m: &Mat4, dirs: &[Vec3]) -> Vec<Vec3> {
    let rows = load_rows(&m.m);
    dirs.iter()
        .map(|d| {
            let [x, y, z, _] = combine(&rows, [d[0], d[1], d[2], 0.0]).to_array();
            Vec3::new(x, y, z)
        })
        .collect()
}
