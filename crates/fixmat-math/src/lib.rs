//! # fixmat-math
//!
//! Dimension-generic linear algebra for fixed-function style rendering.
//!
//! - [`Vector`] - N-component row vector
//! - [`Matrix`] - R×C row-major matrix; square ones add determinant, adjoint
//!   and inverse (closed forms up to 4×4, cofactor expansion beyond)
//! - [`Quaternion`] - Rotations, axis-angle conversion, rotation matrices
//! - [`slerp`], [`linterp`], [`rinterp`] - Interpolation
//! - [`WithinEpsilon`] - Scale-aware approximate comparison
//!
//! Every type is generic over the [`Scalar`](fixmat_core::Scalar) element and
//! defaults to `f32`. Aliases cover the usual shapes: [`Vec3`], [`DVec3`],
//! [`Mat4`], [`DMat4`], [`Quat`] and so on.
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **row vectors**:
//!
//! ```text
//! result = vector * matrix
//! ```
//!
//! Composition reads left to right: `a * b` applies `a` first.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Mat4, Quat, Vec3, Vec4};
//!
//! let spin = Quat::from_degrees(90.0, Vec3::Z).to_rotation_matrix();
//! let mut shift = Mat4::identity();
//! shift[3] = [0.0, 0.0, 5.0, 1.0];
//!
//! // Rotate, then translate
//! let m = spin * shift;
//! let p = Vec4::point(Vec3::X) * m;
//! assert!((p - Vec4::new(0.0, 1.0, 5.0, 1.0)).length() < 1e-6);
//!
//! let back = p * m.inverse().unwrap();
//! assert!((back - Vec4::point(Vec3::X)).length() < 1e-6);
//! ```
//!
//! # Features
//!
//! - `glam` (default) - `From` conversions to and from glam types
//! - `simd` (default) - [`simd`] batch transforms on `wide::f32x4`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod closed;
mod cofactor;
mod epsilon;
mod interp;
mod matrix;
mod quat;
pub mod square;
mod vector;

#[cfg(feature = "glam")]
mod interop;
#[cfg(feature = "simd")]
pub mod simd;

pub use epsilon::WithinEpsilon;
pub use interp::{Interpolate, linterp, rinterp, slerp, slerp_precomputed};
pub use matrix::Matrix;
pub use quat::Quaternion;
pub use vector::Vector;

/// 2-component `f32` vector.
pub type Vec2 = Vector<2, f32>;
/// 3-component `f32` vector.
pub type Vec3 = Vector<3, f32>;
/// 4-component `f32` vector.
pub type Vec4 = Vector<4, f32>;
/// 2-component `f64` vector.
pub type DVec2 = Vector<2, f64>;
/// 3-component `f64` vector.
pub type DVec3 = Vector<3, f64>;
/// 4-component `f64` vector.
pub type DVec4 = Vector<4, f64>;

/// 2×2 `f32` matrix.
pub type Mat2 = Matrix<2, 2, f32>;
/// 3×3 `f32` matrix.
pub type Mat3 = Matrix<3, 3, f32>;
/// 4×4 `f32` matrix.
pub type Mat4 = Matrix<4, 4, f32>;
/// 2×2 `f64` matrix.
pub type DMat2 = Matrix<2, 2, f64>;
/// 3×3 `f64` matrix.
pub type DMat3 = Matrix<3, 3, f64>;
/// 4×4 `f64` matrix.
pub type DMat4 = Matrix<4, 4, f64>;

/// 2 rows, 3 columns, `f32`.
pub type Mat2x3 = Matrix<2, 3, f32>;
/// 3 rows, 2 columns, `f32`.
pub type Mat3x2 = Matrix<3, 2, f32>;
/// 3 rows, 4 columns, `f32`.
pub type Mat3x4 = Matrix<3, 4, f32>;
/// 4 rows, 3 columns, `f32`.
pub type Mat4x3 = Matrix<4, 3, f32>;

/// `f32` quaternion.
pub type Quat = Quaternion<f32>;
/// `f64` quaternion.
pub type DQuat = Quaternion<f64>;
