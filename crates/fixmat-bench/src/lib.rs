//! Shared inputs for the fixmat benchmarks.
//!
//! Run with: `cargo bench -p fixmat-bench`

use fixmat_math::{Matrix, Vec3};

/// Deterministic, well-conditioned N×N matrix: a diagonally dominant pattern
/// so every size has a non-zero determinant.
pub fn sample_matrix<const N: usize>() -> Matrix<N, N, f64> {
    Matrix::from_fn(|i, j| {
        if i == j {
            N as f64 + 1.0
        } else {
            ((i * 7 + j * 3) % 5) as f64 * 0.25 - 0.5
        }
    })
}

/// `count` points on a spiral, for batch transform benchmarks.
pub fn sample_points(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = i as f32 * 0.01;
            Vec3::new(t.cos() * t, t.sin() * t, t * 0.5)
        })
        .collect()
}
