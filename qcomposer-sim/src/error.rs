//! Error types for the circuit executor

use qcomposer_state::StateError;
use std::fmt;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while executing a circuit
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Invalid configuration
    InvalidConfig(String),

    /// Register larger than the configured limit
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// A placement could not be applied to the state
    GateApplicationFailed {
        gate_index: usize,
        gate_type: String,
        reason: String,
    },

    /// State error outside of a circuit run
    State(StateError),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits,
            } => {
                write!(
                    f,
                    "Too many qubits: circuit has {}, max supported is {}",
                    num_qubits, max_qubits
                )
            }
            SimulatorError::GateApplicationFailed {
                gate_index,
                gate_type,
                reason,
            } => {
                write!(
                    f,
                    "Gate {} ({}) application failed: {}",
                    gate_index, gate_type, reason
                )
            }
            SimulatorError::State(err) => write!(f, "State error: {}", err),
        }
    }
}

impl std::error::Error for SimulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulatorError::State(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StateError> for SimulatorError {
    fn from(err: StateError) -> Self {
        SimulatorError::State(err)
    }
}
