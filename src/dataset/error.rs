//! Defines dataset errors.

use std::fmt;

/// Identifies one of the two matrices handed to [`convert_arrays`](super::convert_arrays).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matrix {
    /// The matrix holding the input vectors.
    Input,
    /// The matrix holding the ideal vectors.
    Ideal,
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Ideal => write!(f, "ideal"),
        }
    }
}

/// An error type for all operations building samples out of matrices.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The input matrix has no rows, so its column count is unknown.
    #[error("Input matrix has no rows.")]
    EmptyInput,
    /// The ideal matrix ran out of rows before the input matrix did.
    #[error("Ideal matrix has no row {row}.")]
    MissingIdealRow {
        /// The row of the input matrix that has no ideal counterpart.
        row: usize,
    },
    /// A row is shorter than the first row of its matrix.
    #[error("Row {row} of the {matrix} matrix has {actual} columns, expected at least {expected}.")]
    ShortRow {
        /// The matrix holding the offending row.
        matrix: Matrix,
        /// The index of the offending row.
        row: usize,
        /// The column count of the first row.
        expected: usize,
        /// The column count of the offending row.
        actual: usize,
    },
}
