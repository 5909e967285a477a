//! Matrix-mode context: one [`TransformStack`] per matrix mode.
//!
//! [`MatrixContext`] owns the modelview, projection and texture stacks and
//! forwards fixed-function style calls to whichever one the current
//! [`MatrixMode`] selects. Create one per renderer and pass it where the
//! transforms are needed.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::Vec3;
//! use fixmat_stack::{MatrixContext, MatrixMode};
//!
//! let mut gfx = MatrixContext::new();
//!
//! gfx.set_matrix_mode(MatrixMode::Projection);
//! gfx.load_identity();
//! gfx.set_perspective(45.0, 16.0 / 9.0, 0.1, 100.0, 0.0);
//!
//! gfx.set_matrix_mode(MatrixMode::ModelView);
//! gfx.load_identity();
//! gfx.look_at(Vec3::new(0.0, -4.0, 0.0), Vec3::ZERO, Vec3::Z);
//!
//! gfx.push_matrix();
//! gfx.translate(Vec3::new(1.0, 0.0, 0.0));
//! let mvp = gfx.modelview_projection();
//! gfx.pop_matrix().unwrap();
//! # let _ = mvp;
//! ```

use std::fmt;

use fixmat_core::{Result, Scalar};
use fixmat_math::{Matrix, Quaternion, Vector};
use tracing::trace;

use crate::TransformStack;

/// Which stack the forwarding methods of [`MatrixContext`] act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixMode {
    /// Object to eye space.
    #[default]
    ModelView,
    /// Eye to clip space.
    Projection,
    /// Texture coordinate transform.
    Texture,
}

impl fmt::Display for MatrixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ModelView => "modelview",
            Self::Projection => "projection",
            Self::Texture => "texture",
        };
        f.write_str(name)
    }
}

/// Modelview, projection and texture stacks plus the current mode.
#[derive(Debug, Clone, Default)]
pub struct MatrixContext<S: Scalar = f32> {
    mode: MatrixMode,
    modelview: TransformStack<S>,
    projection: TransformStack<S>,
    texture: TransformStack<S>,
}

impl<S: Scalar> MatrixContext<S> {
    /// Creates a context in modelview mode with three identity stacks.
    pub fn new() -> Self {
        Self {
            mode: MatrixMode::ModelView,
            modelview: TransformStack::new(),
            projection: TransformStack::new(),
            texture: TransformStack::new(),
        }
    }

    /// Selects the stack that subsequent calls act on.
    pub fn set_matrix_mode(&mut self, mode: MatrixMode) {
        trace!(%mode, "set_matrix_mode");
        self.mode = mode;
    }

    /// The current matrix mode.
    #[inline]
    pub fn matrix_mode(&self) -> MatrixMode {
        self.mode
    }

    /// The stack for `mode`.
    pub fn stack(&self, mode: MatrixMode) -> &TransformStack<S> {
        match mode {
            MatrixMode::ModelView => &self.modelview,
            MatrixMode::Projection => &self.projection,
            MatrixMode::Texture => &self.texture,
        }
    }

    /// Mutable stack for `mode`.
    pub fn stack_mut(&mut self, mode: MatrixMode) -> &mut TransformStack<S> {
        match mode {
            MatrixMode::ModelView => &mut self.modelview,
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::Texture => &mut self.texture,
        }
    }

    /// The stack selected by the current mode.
    #[inline]
    pub fn current(&self) -> &TransformStack<S> {
        self.stack(self.mode)
    }

    /// Mutable stack selected by the current mode.
    #[inline]
    pub fn current_mut(&mut self) -> &mut TransformStack<S> {
        self.stack_mut(self.mode)
    }

    /// Replaces the current top with the identity.
    pub fn load_identity(&mut self) {
        self.current_mut().load_identity();
    }

    /// Duplicates the current top.
    pub fn push_matrix(&mut self) {
        self.current_mut().push();
    }

    /// Pops the current stack; fails at its bottom.
    pub fn pop_matrix(&mut self) -> Result<()> {
        self.current_mut().pop().map(|_| ())
    }

    /// Replaces the current top with `m`.
    pub fn load_matrix(&mut self, m: &Matrix<4, 4, S>) {
        self.current_mut().load_matrix(m);
    }

    /// Sets the current top to `m * top`.
    pub fn multiply_matrix(&mut self, m: &Matrix<4, 4, S>) {
        self.current_mut().multiply_matrix(m);
    }

    /// Composes a translation onto the current stack.
    pub fn translate(&mut self, t: Vector<3, S>) {
        self.current_mut().translate(t);
    }

    /// Rotates by `degrees` about `axis`; a zero angle is skipped.
    pub fn rotate_degrees(&mut self, degrees: S, axis: Vector<3, S>) {
        if degrees == S::ZERO {
            return;
        }
        self.current_mut().rotate_degrees(degrees, axis);
    }

    /// Rotates by `q`; skipped when `w` is exactly ±1.
    pub fn rotate_quaternion(&mut self, q: Quaternion<S>) {
        if q.w == S::ONE || q.w == -S::ONE {
            return;
        }
        self.current_mut().rotate(q);
    }

    /// Scales by `s`; skipped for `(1, 1, 1)`.
    pub fn scale(&mut self, s: Vector<3, S>) {
        if s == Vector::ONE {
            return;
        }
        self.current_mut().scale(s);
    }

    /// Composes an orthographic projection onto the current stack.
    pub fn ortho(&mut self, left: S, right: S, bottom: S, top: S, near: S, far: S) {
        self.current_mut().ortho(left, right, bottom, top, near, far);
    }

    /// Composes a viewing transform onto the current stack.
    pub fn look_at(&mut self, eye: Vector<3, S>, center: Vector<3, S>, up: Vector<3, S>) {
        self.current_mut().look_at(eye, center, up);
    }

    /// 2D orthographic projection with depth range `[-1, 1]`.
    pub fn set_orthographic_2d(&mut self, left: S, right: S, bottom: S, top: S) {
        self.ortho(left, right, bottom, top, -S::ONE, S::ONE);
    }

    /// Orthographic projection for a screen of height/width `screen_ratio`.
    ///
    /// X spans `[-1, 1]` and Y spans `[-screen_ratio, screen_ratio]`, then
    /// both are zoomed out by `scale * 0.5 * aspect`. A non-zero
    /// `orientation` (degrees) rotates the result about Z for rotated
    /// displays.
    pub fn set_orthographic(&mut self, screen_ratio: S, scale: S, aspect: S, near: S, far: S, orientation: S) {
        let zoom = scale * S::HALF * aspect;
        self.ortho(-S::ONE, S::ONE, -screen_ratio, screen_ratio, near, far);
        self.scale(Vector::<3, S>::new(S::ONE / zoom, S::ONE / zoom, S::ONE));
        self.rotate_degrees(orientation, Vector::<3, S>::Z);
    }

    /// Perspective projection followed by the display orientation rotation.
    pub fn set_perspective(&mut self, fovy: S, aspect: S, near: S, far: S, orientation: S) {
        self.current_mut().perspective(fovy, aspect, near, far);
        self.rotate_degrees(orientation, Vector::<3, S>::Z);
    }

    /// `modelview.top * projection.top`.
    pub fn modelview_projection(&self) -> Matrix<4, 4, S> {
        *self.modelview.top() * *self.projection.top()
    }

    /// Normal matrix of the modelview top.
    pub fn normal_matrix(&self) -> Result<Matrix<3, 3, S>> {
        self.modelview.normal_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixmat_core::Error;
    use fixmat_math::{DMat4, DQuat, DVec3, DVec4, Mat4, Vec3, WithinEpsilon};

    #[test]
    fn test_mode_dispatch() {
        let mut gfx = MatrixContext::<f32>::new();
        assert_eq!(gfx.matrix_mode(), MatrixMode::ModelView);

        gfx.set_matrix_mode(MatrixMode::Texture);
        gfx.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(gfx.stack(MatrixMode::Texture).top()[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(*gfx.stack(MatrixMode::ModelView).top(), Mat4::identity());
        assert_eq!(*gfx.stack(MatrixMode::Projection).top(), Mat4::identity());

        gfx.load_identity();
        assert_eq!(*gfx.current().top(), Mat4::identity());
    }

    #[test]
    fn test_push_pop_per_mode() {
        let mut gfx = MatrixContext::<f32>::new();
        gfx.push_matrix();
        gfx.set_matrix_mode(MatrixMode::Projection);
        assert_eq!(gfx.pop_matrix(), Err(Error::stack_bottom(1)));
        gfx.set_matrix_mode(MatrixMode::ModelView);
        assert!(gfx.pop_matrix().is_ok());
    }

    #[test]
    fn test_noop_transforms() {
        let mut gfx = MatrixContext::<f64>::new();
        let m = DMat4::from_fn(|i, j| (i + 2 * j) as f64);
        gfx.load_matrix(&m);
        gfx.rotate_degrees(0.0, DVec3::new(0.0, 0.0, 1.0));
        gfx.rotate_quaternion(DQuat::IDENTITY);
        gfx.rotate_quaternion(-DQuat::IDENTITY);
        gfx.scale(DVec3::ONE);
        assert_eq!(*gfx.current().top(), m);

        gfx.scale(DVec3::new(2.0, 1.0, 1.0));
        assert_ne!(*gfx.current().top(), m);
    }

    #[test]
    fn test_orthographic_2d() {
        let mut gfx = MatrixContext::<f64>::new();
        gfx.set_matrix_mode(MatrixMode::Projection);
        gfx.set_orthographic_2d(0.0, 256.0, 0.0, 128.0);
        let p = DVec4::new(256.0, 128.0, 0.0, 1.0) * *gfx.current().top();
        assert_eq!(p, DVec4::new(1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_orthographic_screen() {
        let mut gfx = MatrixContext::<f64>::new();
        gfx.set_matrix_mode(MatrixMode::Projection);
        // zoom = 4 * 0.5 * 1 = 2
        gfx.set_orthographic(1.5, 4.0, 1.0, 1.0, 100.0, 0.0);
        let p = DVec4::new(2.0, 3.0, -1.0, 1.0) * *gfx.current().top();
        assert!((p.x() - 1.0).abs() < 1e-12);
        assert!((p.y() - 1.0).abs() < 1e-12);

        // Orientation rotates the view about Z
        let mut rotated = MatrixContext::<f64>::new();
        rotated.set_orthographic(1.5, 4.0, 1.0, 1.0, 100.0, 90.0);
        let q = DVec4::new(0.0, 2.0, -1.0, 1.0) * *rotated.current().top();
        assert!((q.x() + 1.0).abs() < 1e-12, "{q:?}");
    }

    #[test]
    fn test_perspective_with_orientation() {
        let mut plain = MatrixContext::<f64>::new();
        plain.set_perspective(60.0, 1.0, 1.0, 10.0, 0.0);
        let mut manual = TransformStack::<f64>::new();
        manual.perspective(60.0, 1.0, 1.0, 10.0);
        assert_eq!(plain.current().top(), manual.top());

        let mut rotated = MatrixContext::<f64>::new();
        rotated.set_perspective(60.0, 1.0, 1.0, 10.0, 90.0);
        manual.rotate_degrees(90.0, DVec3::new(0.0, 0.0, 1.0));
        assert!(rotated.current().top().within_epsilon(manual.top()));
    }

    #[test]
    fn test_modelview_projection_and_normal() {
        let mut gfx = MatrixContext::<f64>::new();
        gfx.set_matrix_mode(MatrixMode::Projection);
        gfx.set_perspective(45.0, 1.0, 0.1, 100.0, 0.0);
        gfx.set_matrix_mode(MatrixMode::ModelView);
        gfx.scale(DVec3::new(2.0, 2.0, 2.0));

        let mvp = gfx.modelview_projection();
        let expected = *gfx.stack(MatrixMode::ModelView).top() * *gfx.stack(MatrixMode::Projection).top();
        assert_eq!(mvp, expected);

        let n = gfx.normal_matrix().unwrap();
        assert_eq!(n[0][0], 0.5);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(MatrixMode::Projection.to_string(), "projection");
        assert_eq!(MatrixMode::default(), MatrixMode::ModelView);
    }
}
