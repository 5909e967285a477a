//! Closed-form determinant, adjoint and inverse for 2x2, 3x3 and 4x4.
//!
//! Inputs are flat row-major slices. The inverse functions return the
//! determinant alongside `adjoint / det` so the caller can choose between a
//! checked and an unchecked result without recomputing anything.

use fixmat_core::Scalar;

#[inline]
fn cross3<S: Scalar>(a: [S; 3], b: [S; 3]) -> [S; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn dot3<S: Scalar>(a: [S; 3], b: [S; 3]) -> S {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn scale<S: Scalar, const K: usize>(mut a: [S; K], s: S) -> [S; K] {
    for v in &mut a {
        *v *= s;
    }
    a
}

// 2x2

#[inline]
pub(crate) fn determinant2<S: Scalar>(m: &[S]) -> S {
    m[0] * m[3] - m[1] * m[2]
}

#[inline]
pub(crate) fn adjoint2<S: Scalar>(m: &[S]) -> [S; 4] {
    [m[3], -m[1], -m[2], m[0]]
}

#[inline]
pub(crate) fn inverse2<S: Scalar>(m: &[S]) -> (S, [S; 4]) {
    let det = determinant2(m);
    (det, scale(adjoint2(m), S::ONE / det))
}

// 3x3

#[inline]
fn rows3<S: Scalar>(m: &[S]) -> ([S; 3], [S; 3], [S; 3]) {
    ([m[0], m[1], m[2]], [m[3], m[4], m[5]], [m[6], m[7], m[8]])
}

/// Adjoint whose columns are the cyclic row cross products.
#[inline]
fn adjoint3_from_columns<S: Scalar>(c0: [S; 3], c1: [S; 3], c2: [S; 3]) -> [S; 9] {
    [
        c0[0], c1[0], c2[0], //
        c0[1], c1[1], c2[1], //
        c0[2], c1[2], c2[2],
    ]
}

#[inline]
pub(crate) fn determinant3<S: Scalar>(m: &[S]) -> S {
    let (r0, r1, r2) = rows3(m);
    dot3(cross3(r0, r1), r2)
}

#[inline]
pub(crate) fn adjoint3<S: Scalar>(m: &[S]) -> [S; 9] {
    let (r0, r1, r2) = rows3(m);
    adjoint3_from_columns(cross3(r1, r2), cross3(r2, r0), cross3(r0, r1))
}

#[inline]
pub(crate) fn inverse3<S: Scalar>(m: &[S]) -> (S, [S; 9]) {
    let (r0, r1, r2) = rows3(m);
    let c2 = cross3(r0, r1);
    let det = dot3(c2, r2);
    let adj = adjoint3_from_columns(cross3(r1, r2), cross3(r2, r0), c2);
    (det, scale(adj, S::ONE / det))
}

// 4x4
//
// Naming: a..d is row 0, e..h row 1, i..l row 2. `af_be` is a*f - b*e.

struct Pairs4<S> {
    af_be: S,
    ag_ce: S,
    ah_de: S,
    aj_bi: S,
    ak_ci: S,
    al_di: S,
    bg_cf: S,
    bh_df: S,
    bk_cj: S,
    bl_dj: S,
    ch_dg: S,
    cl_dk: S,
    ej_fi: S,
    ek_gi: S,
    el_hi: S,
    fk_gj: S,
    fl_hj: S,
    gl_hk: S,
}

impl<S: Scalar> Pairs4<S> {
    #[inline]
    fn new(m: &[S]) -> Self {
        let (a, b, c, d) = (m[0], m[1], m[2], m[3]);
        let (e, f, g, h) = (m[4], m[5], m[6], m[7]);
        let (i, j, k, l) = (m[8], m[9], m[10], m[11]);
        Self {
            af_be: a * f - b * e,
            ag_ce: a * g - c * e,
            ah_de: a * h - d * e,
            aj_bi: a * j - b * i,
            ak_ci: a * k - c * i,
            al_di: a * l - d * i,
            bg_cf: b * g - c * f,
            bh_df: b * h - d * f,
            bk_cj: b * k - c * j,
            bl_dj: b * l - d * j,
            ch_dg: c * h - d * g,
            cl_dk: c * l - d * k,
            ej_fi: e * j - f * i,
            ek_gi: e * k - g * i,
            el_hi: e * l - h * i,
            fk_gj: f * k - g * j,
            fl_hj: f * l - h * j,
            gl_hk: g * l - h * k,
        }
    }

    /// First adjoint column, entries `[i][0]`.
    #[inline]
    fn column0(&self, m: &[S]) -> [S; 4] {
        let (m30, m31, m32, m33) = (m[12], m[13], m[14], m[15]);
        [
            self.gl_hk * m31 - self.fl_hj * m32 + self.fk_gj * m33,
            -self.gl_hk * m30 + self.el_hi * m32 - self.ek_gi * m33,
            self.fl_hj * m30 - self.el_hi * m31 + self.ej_fi * m33,
            -self.fk_gj * m30 + self.ek_gi * m31 - self.ej_fi * m32,
        ]
    }

    /// Adjoint columns 1 to 3, grouped by row.
    #[inline]
    fn columns123(&self, m: &[S]) -> [[S; 3]; 4] {
        let (m20, m21, m22, m23) = (m[8], m[9], m[10], m[11]);
        let (m30, m31, m32, m33) = (m[12], m[13], m[14], m[15]);
        [
            [
                -self.cl_dk * m31 + self.bl_dj * m32 - self.bk_cj * m33,
                self.ch_dg * m31 - self.bh_df * m32 + self.bg_cf * m33,
                -self.ch_dg * m21 + self.bh_df * m22 - self.bg_cf * m23,
            ],
            [
                self.cl_dk * m30 - self.al_di * m32 + self.ak_ci * m33,
                -self.ch_dg * m30 + self.ah_de * m32 - self.ag_ce * m33,
                self.ch_dg * m20 - self.ah_de * m22 + self.ag_ce * m23,
            ],
            [
                -self.bl_dj * m30 + self.al_di * m31 - self.aj_bi * m33,
                self.bh_df * m30 - self.ah_de * m31 + self.af_be * m33,
                -self.bh_df * m20 + self.ah_de * m21 - self.af_be * m23,
            ],
            [
                self.bk_cj * m30 - self.ak_ci * m31 + self.aj_bi * m32,
                -self.bg_cf * m30 + self.ag_ce * m31 - self.af_be * m32,
                self.bg_cf * m20 - self.ag_ce * m21 + self.af_be * m22,
            ],
        ]
    }

    #[inline]
    fn assemble(c0: [S; 4], rest: [[S; 3]; 4]) -> [S; 16] {
        let mut out = [S::ZERO; 16];
        for i in 0..4 {
            out[i * 4] = c0[i];
            out[i * 4 + 1..i * 4 + 4].copy_from_slice(&rest[i]);
        }
        out
    }
}

/// Expansion along row 3; terms with a zero multiplier are skipped so affine
/// matrices (row 3 = `0 0 0 1`) only evaluate one cofactor.
pub(crate) fn determinant4<S: Scalar>(m: &[S]) -> S {
    let p = Pairs4::new(m);
    let (m20, m21, m22, m23) = (m[8], m[9], m[10], m[11]);
    let (m30, m31, m32, m33) = (m[12], m[13], m[14], m[15]);

    let mut det = S::ZERO;
    if m30 != S::ZERO {
        det += (-p.ch_dg * m21 + p.bh_df * m22 - p.bg_cf * m23) * m30;
    }
    if m31 != S::ZERO {
        det += (p.ch_dg * m20 - p.ah_de * m22 + p.ag_ce * m23) * m31;
    }
    if m32 != S::ZERO {
        det += (-p.bh_df * m20 + p.ah_de * m21 - p.af_be * m23) * m32;
    }
    if m33 != S::ZERO {
        det += (p.bg_cf * m20 - p.ag_ce * m21 + p.af_be * m22) * m33;
    }
    det
}

pub(crate) fn adjoint4<S: Scalar>(m: &[S]) -> [S; 16] {
    let p = Pairs4::new(m);
    Pairs4::assemble(p.column0(m), p.columns123(m))
}

/// Determinant comes from the first row and the first adjoint column, so it
/// costs four multiplies on top of the adjoint.
pub(crate) fn inverse4<S: Scalar>(m: &[S]) -> (S, [S; 16]) {
    let p = Pairs4::new(m);
    let c0 = p.column0(m);
    let det = m[0] * c0[0] + m[1] * c0[1] + m[2] * c0[2] + m[3] * c0[3];
    let adj = Pairs4::assemble(c0, p.columns123(m));
    (det, scale(adj, S::ONE / det))
}
