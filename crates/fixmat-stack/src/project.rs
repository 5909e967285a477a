//! Object/window coordinate mapping (gluProject / gluUnProject).
//!
//! Both directions use the row-vector convention of the rest of the
//! workspace: clip coordinates are `(obj, 1) * modelview * projection`.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Mat4, Vec3};
//! use fixmat_stack::{Viewport, project, unproject};
//!
//! let vp = Viewport::new(0.0, 0.0, 640.0, 480.0);
//! let (mv, proj) = (Mat4::identity(), Mat4::identity());
//!
//! let win = project(Vec3::ZERO, &mv, &proj, &vp).unwrap();
//! assert_eq!(win, Vec3::new(320.0, 240.0, 0.5));
//!
//! let obj = unproject(win, &mv, &proj, &vp).unwrap();
//! assert_eq!(obj, Vec3::ZERO);
//! ```

use fixmat_core::{Error, Result, Scalar};
use fixmat_math::{Matrix, Vector};
use tracing::debug;

/// Window rectangle that normalized device coordinates map onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport<S = f32> {
    /// Left edge.
    pub x: S,
    /// Bottom edge.
    pub y: S,
    /// Width.
    pub width: S,
    /// Height.
    pub height: S,
}

impl<S: Scalar> Viewport<S> {
    /// Creates a viewport.
    pub const fn new(x: S, y: S, width: S, height: S) -> Self {
        Self { x, y, width, height }
    }
}

fn perspective_divide<S: Scalar>(v: Vector<4, S>) -> Result<Vector<3, S>> {
    let w = v.w();
    if w == S::ZERO {
        return Err(Error::DegenerateW);
    }
    Ok(v.truncate() / w)
}

/// Maps object coordinates to window coordinates.
///
/// Window depth lands in `[0, 1]` for points between the near and far
/// planes. Fails with [`Error::DegenerateW`] when the clip-space `w` is zero.
pub fn project<S: Scalar>(
    obj: Vector<3, S>,
    modelview: &Matrix<4, 4, S>,
    projection: &Matrix<4, 4, S>,
    viewport: &Viewport<S>,
) -> Result<Vector<3, S>> {
    let clip = obj.extend(S::ONE) * *modelview * *projection;
    let ndc = perspective_divide(clip)?;
    let unit = ndc.map(|c| c * S::HALF + S::HALF);
    Ok(Vector::<3, S>::new(
        unit.x() * viewport.width + viewport.x,
        unit.y() * viewport.height + viewport.y,
        unit.z(),
    ))
}

/// Maps window coordinates back to object coordinates.
///
/// Fails with [`Error::SingularMatrix`] when `modelview * projection` has no
/// inverse and with [`Error::DegenerateW`] when the unprojected `w` is zero.
pub fn unproject<S: Scalar>(
    win: Vector<3, S>,
    modelview: &Matrix<4, 4, S>,
    projection: &Matrix<4, 4, S>,
    viewport: &Viewport<S>,
) -> Result<Vector<3, S>> {
    let inv = (*modelview * *projection).inverse().inspect_err(|e| {
        debug!(error = %e, "unproject: modelview * projection not invertible");
    })?;
    let ndc = Vector::<4, S>::new(
        (win.x() - viewport.x) / viewport.width * S::TWO - S::ONE,
        (win.y() - viewport.y) / viewport.height * S::TWO - S::ONE,
        win.z() * S::TWO - S::ONE,
        S::ONE,
    );
    perspective_divide(ndc * inv)
}
