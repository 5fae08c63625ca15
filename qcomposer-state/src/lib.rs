//! Dense state vector for the qcomposer simulator
//!
//! [`StateVector`] stores the `2^n` amplitudes of an `n`-qubit register and
//! applies any `2^k × 2^k` gate matrix to any ordered list of `k` qubits.
//! Gates can be applied directly as matrices or looked up by id in a
//! [`GateCatalog`](qcomposer_gates::GateCatalog).
//!
//! # Example
//!
//! ```
//! use qcomposer_gates::{GateCatalog, Params};
//! use qcomposer_state::StateVector;
//!
//! let catalog = GateCatalog::standard();
//! let mut state = StateVector::new(2).unwrap();
//! state.apply_gate(&catalog, "H", &[0], &Params::new()).unwrap();
//! state.apply_gate(&catalog, "CNOT", &[0, 1], &Params::new()).unwrap();
//!
//! let probabilities = state.probability_map(1e-6);
//! assert_eq!(probabilities.len(), 2);
//! assert!((probabilities["11"] - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod labeled;
pub mod state_vector;

pub use error::{Result, StateError};
pub use labeled::{Amplitude, LabeledAmplitudes};
pub use state_vector::{ApplyOutcome, StateVector, MAX_QUBITS};
