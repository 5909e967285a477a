//! # fixmat-stack
//!
//! OpenGL 1.x style matrix stacks on top of [`fixmat_math`].
//!
//! - [`TransformStack`] - Push/pop stack of 4×4 matrices with rotate,
//!   scale, translate, look-at and projection composition
//! - [`MatrixContext`] - Modelview, projection and texture stacks selected by
//!   [`MatrixMode`]
//! - [`project`], [`unproject`] - Object/window coordinate mapping through a
//!   [`Viewport`]
//!
//! Matrices follow the row-vector convention of `fixmat-math`: the modelview
//! projection is `modelview * projection` and a vertex is transformed as
//! `v * mvp`. The flat array of the result can be uploaded to GL with
//! `transpose = false`.
//!
//! # Logging
//!
//! Stack operations emit `tracing` events: `trace` for push/pop and
//! projection setup, `debug` for failed pops and singular inverses, `warn`
//! for degenerate look-at bases.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod project;
pub mod stack;

pub use context::{MatrixContext, MatrixMode};
pub use project::{Viewport, project, unproject};
pub use stack::TransformStack;
