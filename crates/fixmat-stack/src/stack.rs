//! Transformation stack with legacy fixed-function semantics.
//!
//! A [`TransformStack`] is never empty: it starts with one identity matrix
//! and refuses to pop its last entry. Every `load_*` method overwrites the
//! top; every compose method (`rotate*`, `scale`, `translate`,
//! `multiply_matrix`, `look_at`, `frustum`, `ortho`, `perspective`,
//! `pick_matrix`) pre-multiplies its transform onto the top, so with row
//! vectors the most recently composed transform is applied to vertices first,
//! exactly as in OpenGL 1.x.
//!
//! Compose methods edit only the rows they affect instead of running a full
//! 4×4 product.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_math::{Vec3, Vec4};
//! use fixmat_stack::TransformStack;
//!
//! let mut mv = TransformStack::new();
//! mv.translate(Vec3::new(0.0, 0.0, -5.0))
//!     .rotate_degrees(90.0, Vec3::Z);
//!
//! // Rotation applies first, then the translation
//! let p = Vec4::point(Vec3::X) * *mv.top();
//! assert!((p - Vec4::new(0.0, 1.0, -5.0, 1.0)).length() < 1e-6);
//!
//! mv.push();
//! mv.scale(Vec3::splat(2.0));
//! mv.pop().unwrap();
//! assert_eq!(mv.depth(), 1);
//! assert!(mv.pop().is_err());
//! ```

use fixmat_core::{Error, Result, Scalar, deg_to_rad};
use fixmat_math::{Matrix, Quaternion, Vector};
use tracing::{debug, trace, warn};

use crate::Viewport;

type M4<S> = Matrix<4, 4, S>;
type V3<S> = Vector<3, S>;

/// A non-empty stack of 4×4 row-major matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStack<S: Scalar = f32> {
    stack: Vec<M4<S>>,
}

impl<S: Scalar> Default for TransformStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> TransformStack<S> {
    /// Creates a stack holding one identity matrix.
    pub fn new() -> Self {
        Self {
            stack: vec![M4::identity()],
        }
    }

    /// Number of matrices on the stack (always at least 1).
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The current matrix.
    #[inline]
    pub fn top(&self) -> &M4<S> {
        &self.stack[self.stack.len() - 1]
    }

    /// Mutable access to the current matrix.
    #[inline]
    pub fn top_mut(&mut self) -> &mut M4<S> {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Matrix at `index`.
    ///
    /// Non-negative indices count from the bottom (0 is the first matrix
    /// pushed). Negative indices count down from the top: `-1` is the entry
    /// just below the top.
    pub fn get(&self, index: isize) -> Result<&M4<S>> {
        let depth = self.stack.len();
        let resolved = if index >= 0 {
            Some(index.unsigned_abs())
        } else {
            (depth - 1).checked_sub(index.unsigned_abs())
        };
        resolved
            .and_then(|i| self.stack.get(i))
            .ok_or(Error::index_out_of_bounds(index, depth))
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &M4<S>> {
        self.stack.iter()
    }

    /// Duplicates the top matrix.
    pub fn push(&mut self) -> &mut Self {
        let top = *self.top();
        self.stack.push(top);
        trace!(depth = self.stack.len(), "push");
        self
    }

    /// Discards the top matrix.
    ///
    /// Fails with [`Error::StackBottom`] when only one matrix remains.
    pub fn pop(&mut self) -> Result<&mut Self> {
        let depth = self.stack.len();
        if depth == 1 {
            debug!(depth, "pop at bottom of stack");
            return Err(Error::stack_bottom(depth));
        }
        self.stack.pop();
        trace!(depth = depth - 1, "pop");
        Ok(self)
    }

    /// Replaces the top with the identity.
    pub fn load_identity(&mut self) -> &mut Self {
        self.top_mut().load_identity();
        self
    }

    // ---- rotation ----

    /// Replaces the top with the rotation matrix of `q`.
    pub fn load_rotation(&mut self, q: Quaternion<S>) -> &mut Self {
        *self.top_mut() = q.to_rotation_matrix();
        self
    }

    /// Replaces the top with a rotation of `degrees` about `axis`.
    pub fn load_rotation_degrees(&mut self, degrees: S, axis: V3<S>) -> &mut Self {
        self.load_rotation(Quaternion::from_degrees(degrees, axis))
    }

    /// Replaces the top with a rotation from `(x, y, z, radians)`.
    pub fn load_rotation_axis_angle(&mut self, axis_angle: Vector<4, S>) -> &mut Self {
        self.load_rotation(Quaternion::from_axis_angle(axis_angle))
    }

    /// Composes the rotation of `q` onto the top.
    pub fn rotate(&mut self, q: Quaternion<S>) -> &mut Self {
        self.rotate_by(&q.to_rotation_matrix());
        self
    }

    /// Composes a rotation of `degrees` about `axis` onto the top.
    pub fn rotate_degrees(&mut self, degrees: S, axis: V3<S>) -> &mut Self {
        self.rotate(Quaternion::from_degrees(degrees, axis))
    }

    /// Composes a rotation from `(x, y, z, radians)` onto the top.
    pub fn rotate_axis_angle(&mut self, axis_angle: Vector<4, S>) -> &mut Self {
        self.rotate(Quaternion::from_axis_angle(axis_angle))
    }

    // Rows 0..3 become the 3x3 block of r times the old rows 0..3; row 3 stays.
    fn rotate_by(&mut self, r: &M4<S>) {
        let m = self.top_mut();
        let a = [m[0], m[1], m[2]];
        for i in 0..3 {
            for j in 0..4 {
                m[i][j] = r[i][0] * a[0][j] + r[i][1] * a[1][j] + r[i][2] * a[2][j];
            }
        }
    }

    // ---- scale / translation / arbitrary ----

    /// Replaces the top with `diag(s.x, s.y, s.z, 1)`.
    pub fn load_scale(&mut self, s: V3<S>) -> &mut Self {
        *self.top_mut() = M4::from_diagonal(s.extend(S::ONE));
        self
    }

    /// Scales rows 0..3 of the top by the components of `s`.
    pub fn scale(&mut self, s: V3<S>) -> &mut Self {
        let m = self.top_mut();
        for i in 0..3 {
            for v in m[i].iter_mut() {
                *v *= s[i];
            }
        }
        self
    }

    /// Replaces the top with a translation by `t`.
    pub fn load_translation(&mut self, t: V3<S>) -> &mut Self {
        let m = self.top_mut();
        m.load_identity();
        m.set_row(3, t.extend(S::ONE));
        self
    }

    /// Composes a translation by `t` onto the top.
    pub fn translate(&mut self, t: V3<S>) -> &mut Self {
        let m = self.top_mut();
        for j in 0..4 {
            let d = t[0] * m[0][j] + t[1] * m[1][j] + t[2] * m[2][j];
            m[3][j] += d;
        }
        self
    }

    /// Replaces the top with `a`.
    pub fn load_matrix(&mut self, a: &M4<S>) -> &mut Self {
        *self.top_mut() = *a;
        trace!(depth = self.depth(), "load_matrix");
        self
    }

    /// Sets the top to `a * top`.
    pub fn multiply_matrix(&mut self, a: &M4<S>) -> &mut Self {
        let m = self.top_mut();
        *m = *a * *m;
        self
    }

    // ---- viewing and projection ----

    /// Composes a viewing transform looking from `eye` towards `center`.
    ///
    /// The camera looks down its local -Z with `up` projected onto its +Y.
    /// When `up` is parallel to the view direction the side axis cannot be
    /// formed and is left zero.
    pub fn look_at(&mut self, eye: V3<S>, center: V3<S>, up: V3<S>) -> &mut Self {
        let mut f = eye - center;
        if f.safe_normalize() == S::ZERO {
            warn!("look_at: eye and center coincide");
        }
        let mut s = up.cross(f);
        if s.safe_normalize() == S::ZERO {
            warn!("look_at: up is parallel to the view direction");
        }
        let u = f.cross(s);

        let mut l = M4::identity();
        for i in 0..3 {
            l[i] = [s[i], u[i], f[i], S::ZERO];
        }
        l[3] = [-eye.dot(s), -eye.dot(u), -eye.dot(f), S::ONE];

        self.multiply_matrix(&l)
    }

    /// Composes a perspective frustum (glFrustum).
    pub fn frustum(&mut self, left: S, right: S, bottom: S, top: S, near: S, far: S) -> &mut Self {
        let (rl, tb, fn_) = (right - left, top - bottom, far - near);
        let m = self.top_mut();
        let tmp = m.row(2);

        let r2 = m.row(0) * ((right + left) / rl) + m.row(1) * ((top + bottom) / tb)
            - tmp * ((far + near) / fn_)
            - m.row(3);
        m.set_row(2, r2);
        m.set_row(0, m.row(0) * (S::TWO * near / rl));
        m.set_row(1, m.row(1) * (S::TWO * near / tb));
        m.set_row(3, tmp * (-S::TWO * far * near / fn_));
        trace!(depth = self.depth(), "frustum");
        self
    }

    /// Composes an orthographic projection (glOrtho).
    pub fn ortho(&mut self, left: S, right: S, bottom: S, top: S, near: S, far: S) -> &mut Self {
        let (rl, tb, fn_) = (right - left, top - bottom, far - near);
        let m = self.top_mut();

        let r3 = m.row(3) - m.row(0) * ((right + left) / rl)
            - m.row(1) * ((top + bottom) / tb)
            - m.row(2) * ((far + near) / fn_);
        m.set_row(3, r3);
        m.set_row(0, m.row(0) * (S::TWO / rl));
        m.set_row(1, m.row(1) * (S::TWO / tb));
        m.set_row(2, m.row(2) * (-S::TWO / fn_));
        trace!(depth = self.depth(), "ortho");
        self
    }

    /// Composes a symmetric perspective projection (gluPerspective).
    ///
    /// `fovy` is the vertical field of view in degrees; `aspect` is
    /// width over height.
    pub fn perspective(&mut self, fovy: S, aspect: S, near: S, far: S) -> &mut Self {
        // cot(fovy / 2)
        let f = (S::PI * S::HALF - deg_to_rad(fovy * S::HALF)).tan();
        let nf = near - far;
        let m = self.top_mut();
        let tmp = m.row(2);

        m.set_row(0, m.row(0) * (f / aspect));
        m.set_row(1, m.row(1) * f);
        m.set_row(2, tmp * ((far + near) / nf) - m.row(3));
        m.set_row(3, tmp * (S::TWO * far * near / nf));
        trace!(depth = self.depth(), "perspective");
        self
    }

    /// Restricts drawing to a pick region (gluPickMatrix).
    ///
    /// `(x, y)` is the region center in window coordinates. Does nothing
    /// when `width` or `height` is not positive.
    pub fn pick_matrix(&mut self, x: S, y: S, width: S, height: S, viewport: &Viewport<S>) -> &mut Self {
        if width <= S::ZERO || height <= S::ZERO {
            return self;
        }
        let t = V3::new(
            (viewport.width - S::TWO * (x - viewport.x)) / width,
            (viewport.height - S::TWO * (y - viewport.y)) / height,
            S::ZERO,
        );
        self.translate(t);
        self.scale(V3::new(viewport.width / width, viewport.height / height, S::ONE))
    }

    // ---- derived matrices ----

    /// Inverse transpose of the upper-left 3×3 block of the top.
    ///
    /// Transforms normals when the top holds a modelview with non-uniform
    /// scale. Fails with [`Error::SingularMatrix`] for a degenerate block.
    pub fn normal_matrix(&self) -> Result<Matrix<3, 3, S>> {
        self.transposed_block().inverse().inspect_err(|e| {
            debug!(error = %e, "normal matrix of a singular modelview");
        })
    }

    /// Like [`normal_matrix`](Self::normal_matrix), asserting invertibility in
    /// debug builds only.
    pub fn normal_matrix_unchecked(&self) -> Matrix<3, 3, S> {
        self.transposed_block().inverse_unchecked()
    }

    fn transposed_block(&self) -> Matrix<3, 3, S> {
        let m = self.top();
        Matrix::from_fn(|i, j| m[j][i])
    }
}
