//! Scalar element abstraction.
//!
//! Vectors, matrices and quaternions are generic over a [`Scalar`], which is
//! implemented for `f32` and `f64`. The trait carries the arithmetic operator
//! bounds generic code needs, the few transcendental functions the math layer
//! calls, and the per-precision tolerances:
//!
//! | Constant | `f32` | `f64` | Used by |
//! |---|---|---|---|
//! | [`Scalar::EPSILON`] | `1e-5` | `1e-13` | relative comparison, quaternion identity collapse |
//! | [`Scalar::SLERP_EPSILON`] | `1e-4` | `1e-9` | slerp fallback to linear interpolation |
//!
//! # Usage
//!
//! ```rust
//! use fixmat_core::Scalar;
//!
//! fn hypot<S: Scalar>(a: S, b: S) -> S {
//!     (a * a + b * b).sqrt()
//! }
//!
//! assert_eq!(hypot(3.0f32, 4.0), 5.0);
//! assert!(1.0f64.within_epsilon(1.0 + 1e-15));
//! ```

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point element type of every fixmat value.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `2`.
    const TWO: Self;
    /// `0.5`.
    const HALF: Self;
    /// Archimedes' constant.
    const PI: Self;
    /// Relative tolerance for [`Scalar::within_epsilon`].
    const EPSILON: Self;
    /// Angle below which slerp degrades to linear interpolation.
    const SLERP_EPSILON: Self;

    /// Converts from `f64`, rounding if the target is narrower.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Sine (radians).
    fn sin(self) -> Self;

    /// Cosine (radians).
    fn cos(self) -> Self;

    /// Tangent (radians).
    fn tan(self) -> Self;

    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Returns `true` if neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Sine and cosine of `self` (radians).
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Relative equality within [`Scalar::EPSILON`].
    ///
    /// When either operand is exactly zero the comparison is absolute,
    /// otherwise the difference is scaled by the operand of larger magnitude.
    #[inline]
    fn within_epsilon(self, other: Self) -> bool {
        if self == Self::ZERO || other == Self::ZERO {
            (self - other).abs() < Self::EPSILON
        } else {
            let max = if self.abs() > other.abs() { self } else { other };
            ((self - other) / max).abs() < Self::EPSILON
        }
    }
}

macro_rules! impl_scalar {
    ($t:ident, $eps:expr, $slerp_eps:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = std::$t::consts::PI;
            const EPSILON: Self = $eps;
            const SLERP_EPSILON: Self = $slerp_eps;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $t::tan(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $t::atan2(self, other)
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }
        }
    };
}

impl_scalar!(f32, 1.0e-5, 1.0e-4);
impl_scalar!(f64, 1.0e-13, 1.0e-9);

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<S: Scalar>(degrees: S) -> S {
    degrees * S::PI / S::from_f64(180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<S: Scalar>(radians: S) -> S {
    radians * S::from_f64(180.0) / S::PI
}
