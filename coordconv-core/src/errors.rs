//! Error types for the numeric primitives.
//!
//! Almost everything in this crate is a total function. The exceptions are the
//! constructors that cannot produce a meaningful result from their input, such as
//! [`compute_rotation_matrix`](crate::matrix::compute_rotation_matrix) with a zero axis.
//! Those return [`AstroResult<T>`].
//!
//! ```
//! use coordconv_core::{compute_rotation_matrix, MathErrorKind, Vector3};
//!
//! let err = compute_rotation_matrix(Vector3::new(f64::NAN, 0.0, 1.0), 10.0).unwrap_err();
//! assert_eq!(err.kind(), MathErrorKind::InvalidInput);
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation (e.g. a zero rotation axis).
    InvalidInput,
}

/// Error type for the numeric primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn kind(&self) -> MathErrorKind {
        match self {
            Self::MathError { kind, .. } => *kind,
        }
    }
}
