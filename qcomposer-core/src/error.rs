//! Error types for matrix algebra

use thiserror::Error;

/// Errors that can occur in matrix operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    /// Element access outside the matrix bounds
    #[error("Matrix index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("Dimension mismatch: {}x{} and {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Backing data does not fit the declared shape
    #[error("Invalid matrix dimension {rows}x{cols} for {len} elements")]
    InvalidDimension { rows: usize, cols: usize, len: usize },
}

impl MatrixError {
    /// Create an index out of range error
    pub fn index_out_of_range(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        }
    }
}
