//! # fixmat-core
//!
//! Core types shared by every fixmat crate.
//!
//! - [`Scalar`] - The floating-point element type (`f32` or `f64`) with the
//!   tolerances the math layer relies on
//! - [`Error`], [`Result`] - Failure taxonomy for checked operations
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The rest of the workspace builds
//! on top of it:
//!
//! ```text
//! fixmat-core (this crate)
//!    ^
//!    |
//!    +-- fixmat-math (vectors, matrices, quaternions, interpolation)
//!           ^
//!           |
//!           +-- fixmat-stack (transformation stacks, projection helpers)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use fixmat_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{Scalar, deg_to_rad, rad_to_deg};
}
