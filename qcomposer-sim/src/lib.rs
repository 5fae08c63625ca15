//! Circuit execution for the qcomposer editor
//!
//! [`CircuitExecutor`] takes the gate placements produced by the circuit
//! editor, resolves each one through a [`GateCatalog`](qcomposer_gates::GateCatalog)
//! and applies it to a [`StateVector`](qcomposer_state::StateVector). The
//! [`ExecutionResult`] carries the labeled amplitudes and the probability map
//! the visualizations read.
//!
//! # Operand mapping
//!
//! | Gates | Operands |
//! |-------|----------|
//! | H, I, X, Y, Z, S, Sdg, T, Td, SX, SXdg, SY, SYdg, Rx, Ry, Rz, U | `[qubit]` |
//! | CNOT, CZ, CRx, CRy, CRz | `[control, target]` |
//! | CCNOT (Toffoli), CCZ | `[control, control2, target]` |
//! | Barrier, RouteX, RouteY, RouteZ | none, skipped |
//!
//! Custom catalog gates pick one of these layouts by their qubit count. A
//! missing `control2` falls back to `control + 1`.
//!
//! # Example
//!
//! ```
//! use qcomposer_gates::GateCatalog;
//! use qcomposer_sim::{CircuitExecutor, GatePlacement};
//! use std::sync::Arc;
//!
//! let mut executor = CircuitExecutor::new(3, Arc::new(GateCatalog::standard())).unwrap();
//! let circuit = [
//!     GatePlacement::single(0, "X", 0),
//!     GatePlacement::single(0, "X", 1),
//!     GatePlacement::doubly_controlled(1, "CCNOT", 0, 1, 2),
//! ];
//!
//! let result = executor.execute_circuit(&circuit).unwrap();
//! assert_eq!(result.probability("111"), 1.0);
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod placement;
pub mod result;
pub mod statistics;

pub use config::ExecutorConfig;
pub use error::{Result, SimulatorError};
pub use executor::CircuitExecutor;
pub use placement::GatePlacement;
pub use result::{ExecutionResult, SimulationWarning};
pub use statistics::ExecutionStatistics;
