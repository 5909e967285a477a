//! Error types for fixmat operations.
//!
//! Every checked entry point in the workspace reports failure through the
//! [`Error`] enum defined here.
//!
//! # Overview
//!
//! Failures fall into two classes:
//! - **Programming errors**: popping the last matrix of a transformation
//!   stack, looking up a stack slot that does not exist, feeding a slice of
//!   the wrong length to a matrix constructor
//! - **Numerical degeneracy**: division by zero, normalizing a zero-length
//!   value, inverting a singular matrix, a homogeneous `w` of zero where a
//!   perspective divide is required
//!
//! Unchecked fast paths (`inverse_unchecked`, `normalize`, scalar `/`) do not
//! return errors. They assert in debug builds and propagate `inf`/`nan` in
//! release builds.
//!
//! # Usage
//!
//! ```rust
//! use fixmat_core::{Error, Result};
//!
//! fn reciprocal(x: f32) -> Result<f32> {
//!     if x == 0.0 {
//!         return Err(Error::divide_by_zero("reciprocal"));
//!     }
//!     Ok(1.0 / x)
//! }
//!
//! assert!(reciprocal(0.0).unwrap_err().is_numerical());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by checked fixmat operations.
///
/// # Categories
///
/// - **Programming errors**: [`StackBottom`](Error::StackBottom),
///   [`IndexOutOfBounds`](Error::IndexOutOfBounds),
///   [`DimensionMismatch`](Error::DimensionMismatch)
/// - **Numerical errors**: [`DivideByZero`](Error::DivideByZero),
///   [`SingularMatrix`](Error::SingularMatrix), [`DegenerateW`](Error::DegenerateW)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Pop requested on a transformation stack that holds a single matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixmat_core::Error;
    ///
    /// let err = Error::stack_bottom(1);
    /// assert!(err.to_string().contains("bottom"));
    /// ```
    #[error("already at bottom of transformation stack (depth {depth})")]
    StackBottom {
        /// Depth of the stack when the pop was attempted
        depth: usize,
    },

    /// Stack slot lookup outside the current depth.
    #[error("stack index {index} out of range for depth {depth}")]
    IndexOutOfBounds {
        /// Requested index (negative values count down from the top)
        index: isize,
        /// Stack depth at the time of the lookup
        depth: usize,
    },

    /// Flat element slice does not match the target shape.
    #[error("expected {expected} elements, got {got}")]
    DimensionMismatch {
        /// Element count required by the target type
        expected: usize,
        /// Element count supplied
        got: usize,
    },

    /// Division by an exact zero.
    ///
    /// Raised by scalar division, by normalizing a zero-length vector or
    /// quaternion, and by inverting a zero quaternion.
    #[error("division by zero in {operation}")]
    DivideByZero {
        /// Operation that attempted the division
        operation: &'static str,
    },

    /// Matrix determinant is exactly zero.
    #[error("singular {dimension}x{dimension} matrix has no inverse")]
    SingularMatrix {
        /// Row and column count of the matrix
        dimension: usize,
    },

    /// Homogeneous `w` component is zero where a perspective divide is needed.
    #[error("homogeneous coordinate w is zero")]
    DegenerateW,
}

impl Error {
    /// Creates an [`Error::StackBottom`] error.
    #[inline]
    pub fn stack_bottom(depth: usize) -> Self {
        Self::StackBottom { depth }
    }

    /// Creates an [`Error::IndexOutOfBounds`] error.
    #[inline]
    pub fn index_out_of_bounds(index: isize, depth: usize) -> Self {
        Self::IndexOutOfBounds { index, depth }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Creates an [`Error::DivideByZero`] error.
    #[inline]
    pub fn divide_by_zero(operation: &'static str) -> Self {
        Self::DivideByZero { operation }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(dimension: usize) -> Self {
        Self::SingularMatrix { dimension }
    }

    /// Returns `true` for failures caused by incorrect calling code.
    #[inline]
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::StackBottom { .. } | Self::IndexOutOfBounds { .. } | Self::DimensionMismatch { .. }
        )
    }

    /// Returns `true` for numerical degeneracy (zero divisors, singular matrices).
    #[inline]
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            Self::DivideByZero { .. } | Self::SingularMatrix { .. } | Self::DegenerateW
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_bottom() {
        let err = Error::stack_bottom(1);
        let msg = err.to_string();
        assert!(msg.contains("bottom"));
        assert!(msg.contains('1'));
        assert!(err.is_programming_error());
        assert!(!err.is_numerical());
    }

    #[test]
    fn test_singular_matrix() {
        let err = Error::singular_matrix(4);
        assert!(err.to_string().contains("4x4"));
        assert!(err.is_numerical());
    }

    #[test]
    fn test_divide_by_zero() {
        let err = Error::divide_by_zero("normalize");
        assert!(err.to_string().contains("normalize"));
        assert!(err.is_numerical());
        assert!(!err.is_programming_error());
    }

    #[test]
    fn test_index_out_of_bounds() {
        let err = Error::index_out_of_bounds(-3, 2);
        let msg = err.to_string();
        assert!(msg.contains("-3"));
        assert!(msg.contains("depth 2"));
        assert!(err.is_programming_error());
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch(16, 9);
        assert_eq!(err.to_string(), "expected 16 elements, got 9");
    }
}
