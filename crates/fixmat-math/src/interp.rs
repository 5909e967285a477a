//! Interpolation between vectors and quaternions.
//!
//! - [`linterp`] - Plain linear interpolation
//! - [`slerp`] - Spherical linear interpolation along the shorter arc
//! - [`slerp_precomputed`] - The slerp kernel for callers that cache the arc
//!   angle per key frame
//! - [`rinterp`] - Sign-corrected, renormalized linear interpolation; cheaper
//!   than slerp and still correct for rotation blending
//!
//! All four work on any [`Interpolate`] value, which covers [`Vector`] and
//! [`Quaternion`].
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Quat, Vec4, slerp};
//!
//! let a = Quat::IDENTITY;
//! let b = Quat::from_axis_angle(Vec4::new(0.0, 0.0, 1.0, std::f32::consts::FRAC_PI_2));
//!
//! let mid = slerp(a, b, 0.5);
//! let expected = Quat::from_axis_angle(Vec4::new(0.0, 0.0, 1.0, std::f32::consts::FRAC_PI_4));
//! assert!((mid - expected).length() < 1e-6);
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use fixmat_core::Scalar;

use crate::{Quaternion, Vector};

/// Values that can be blended by the interpolation functions.
pub trait Interpolate<S: Scalar>:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<S, Output = Self>
    + Div<S, Output = Self>
    + Neg<Output = Self>
{
    /// Inner product.
    fn inner(self, rhs: Self) -> S;

    /// Euclidean norm.
    #[inline]
    fn norm(self) -> S {
        self.inner(self).sqrt()
    }
}

impl<const N: usize, S: Scalar> Interpolate<S> for Vector<N, S> {
    #[inline]
    fn inner(self, rhs: Self) -> S {
        self.dot(rhs)
    }
}

impl<S: Scalar> Interpolate<S> for Quaternion<S> {
    #[inline]
    fn inner(self, rhs: Self) -> S {
        self.dot(rhs)
    }
}

/// Linear interpolation, `(1 - alpha) * x + alpha * y`.
#[inline]
pub fn linterp<S: Scalar, T: Interpolate<S>>(x: T, y: T, alpha: S) -> T {
    x * (S::ONE - alpha) + y * alpha
}

/// Spherical linear interpolation from `x` to `y`.
///
/// `y` is negated when `dot(x, y) < 0` so the blend follows the shorter arc.
/// Arcs narrower than [`Scalar::SLERP_EPSILON`] fall back to [`linterp`].
///
/// # Example
///
/// ```rust
/// use fixmat_math::{DQuat, slerp};
///
/// let q = DQuat::new(0.5, 0.5, 0.5, 0.5);
/// assert_eq!(slerp(q, q, 0.3), q);
/// ```
pub fn slerp<S: Scalar, T: Interpolate<S>>(x: T, y: T, alpha: S) -> T {
    let mut cos_phi = x.inner(y);
    let y = if cos_phi < S::ZERO {
        cos_phi = -cos_phi;
        -y
    } else {
        y
    };

    // Length of the rejection of y from x
    let sin_phi = (y - x * cos_phi).norm();
    let phi = sin_phi.atan2(cos_phi);

    if phi < S::SLERP_EPSILON {
        return linterp(x, y, alpha);
    }
    slerp_precomputed(x, y, alpha, phi, sin_phi)
}

/// Slerp kernel with the arc angle `phi` and `sin(phi)` supplied by the caller.
///
/// No shortest-arc correction is applied; `y` must already be on the same
/// hemisphere as `x`.
#[inline]
pub fn slerp_precomputed<S: Scalar, T: Interpolate<S>>(x: T, y: T, alpha: S, phi: S, sin_phi: S) -> T {
    (x * ((S::ONE - alpha) * phi).sin() + y * (alpha * phi).sin()) / sin_phi
}

/// Rotation-aware linear interpolation.
///
/// Returns `x` at `alpha = 0` and `y` at `alpha = 1`. Otherwise flips `y` onto
/// the hemisphere of `x`, interpolates linearly and renormalizes.
pub fn rinterp<S: Scalar, T: Interpolate<S>>(x: T, y: T, alpha: S) -> T {
    if alpha == S::ZERO {
        return x;
    }
    if alpha == S::ONE {
        return y;
    }
    let y = if x.inner(y) < S::ZERO { -y } else { y };
    let r = linterp(x, y, alpha);
    let len = r.norm();
    if len == S::ZERO {
        return r;
    }
    r / len
}
