//! Recursive cofactor expansion for any dimension.
//!
//! Works on flat row-major slices with the dimension passed at runtime so the
//! recursion can shrink the matrix without const arithmetic on `N`. Cost is
//! O(N!), fine for N >= 5 and for cross-checking the closed forms.

use fixmat_core::Scalar;

/// Copies `m` without row `row` and column `col`.
fn minor<S: Scalar>(m: &[S], n: usize, row: usize, col: usize) -> Vec<S> {
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for i in (0..n).filter(|&i| i != row) {
        for j in (0..n).filter(|&j| j != col) {
            out.push(m[i * n + j]);
        }
    }
    out
}

/// Determinant by expansion along the first row.
pub(crate) fn determinant<S: Scalar>(m: &[S], n: usize) -> S {
    match n {
        0 => S::ONE,
        1 => m[0],
        _ => {
            let mut det = S::ZERO;
            let mut sign = S::ONE;
            for j in 0..n {
                det += sign * m[j] * determinant(&minor(m, n, 0, j), n - 1);
                sign = -sign;
            }
            det
        }
    }
}

/// Adjoint (transposed cofactor matrix).
pub(crate) fn adjoint<S: Scalar>(m: &[S], n: usize) -> Vec<S> {
    if n == 1 {
        return vec![S::ONE];
    }
    let mut adj = vec![S::ZERO; n * n];
    for i in 0..n {
        for j in 0..n {
            let c = determinant(&minor(m, n, i, j), n - 1);
            adj[j * n + i] = if (i + j) % 2 == 0 { c } else { -c };
        }
    }
    adj
}

/// Returns `(det, adjoint / det)`.
///
/// The determinant is taken as the first row dotted with the first adjoint
/// column. A zero determinant yields inf/nan entries; callers decide whether
/// that is an error.
pub(crate) fn inverse<S: Scalar>(m: &[S], n: usize) -> (S, Vec<S>) {
    let mut adj = adjoint(m, n);
    let det = (0..n).fold(S::ZERO, |acc, i| acc + m[i] * adj[i * n]);
    let inv_det = S::ONE / det;
    for v in &mut adj {
        *v *= inv_det;
    }
    (det, adj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor() {
        let m = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(minor(&m, 3, 0, 0), vec![5.0, 6.0, 8.0, 9.0]);
        assert_eq!(minor(&m, 3, 1, 2), vec![1.0, 2.0, 7.0, 8.0]);
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(determinant(&[7.0f64], 1), 7.0);
        assert_eq!(determinant(&[1.0f64, 2.0, 3.0, 4.0], 2), -2.0);
        let m = [2.0f64, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0];
        assert_eq!(determinant(&m, 3), 6.0);
    }

    #[test]
    fn test_adjoint_2x2() {
        assert_eq!(adjoint(&[1.0f32, 2.0, 3.0, 4.0], 2), vec![4.0, -2.0, -3.0, 1.0]);
    }

    #[test]
    fn test_inverse_1x1() {
        let (det, inv) = inverse(&[4.0f32], 1);
        assert_eq!(det, 4.0);
        assert_eq!(inv, vec![0.25]);
    }
}
