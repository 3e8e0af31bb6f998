//! Error types for Eliminar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Eliminar operations.
///
/// Covers both failure regimes of the crate: rejected input at a constructor
/// boundary (dimension mismatches, non-square matrices) and algorithmic
/// failure during elimination (a singular pivot column). Callers receive
/// either a complete result or an error, never a partial value.
///
/// # Examples
///
/// ```
/// use eliminar::error::EliminarError;
///
/// let err = EliminarError::DimensionMismatch {
///     expected: "3".to_string(),
///     actual: "4".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EliminarError {
    /// Matrix/vector dimensions don't conform for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count found
        rows: usize,
        /// Column count found
        cols: usize,
    },

    /// Operation received an empty term list or a zero size.
    EmptyInput {
        /// What was empty
        what: &'static str,
    },

    /// Elimination found no nonzero pivot candidate at or below a diagonal
    /// entry; the system is singular for this strategy.
    Singular {
        /// Elimination step at which the pivot search was exhausted
        pivot_index: usize,
    },
}

impl fmt::Display for EliminarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EliminarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            EliminarError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {rows}x{cols}")
            }
            EliminarError::EmptyInput { what } => {
                write!(f, "empty input: {what}")
            }
            EliminarError::Singular { pivot_index } => {
                write!(
                    f,
                    "singular system: no nonzero pivot in column {pivot_index} at or below row {pivot_index}"
                )
            }
        }
    }
}

impl std::error::Error for EliminarError {}

impl EliminarError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}
