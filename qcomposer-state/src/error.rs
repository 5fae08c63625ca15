//! Error types for state vector operations

use qcomposer_core::MatrixError;
use qcomposer_gates::GateError;
use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Register too large to allocate
    #[error("Invalid state size: {num_qubits} qubits exceeds the limit of {max_qubits}")]
    InvalidDimension { num_qubits: usize, max_qubits: usize },

    /// Matrix or amplitude buffer has the wrong size
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Basis index outside the register
    #[error("Basis index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// The same qubit was given twice as an operand
    #[error("Qubit {0} appears more than once in the operand list")]
    DuplicateQubit(usize),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
