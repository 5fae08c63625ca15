//! Error types for gate construction

use qcomposer_core::MatrixError;
use thiserror::Error;

/// Errors that can occur while building gate matrices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// Gate matrix is not square with a power-of-two dimension
    #[error("Gate matrix must be square with a power-of-two dimension, got {rows}x{cols}")]
    InvalidGateMatrix { rows: usize, cols: usize },

    /// Underlying matrix operation failed
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
