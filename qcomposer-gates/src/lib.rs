//! Quantum gate library for qcomposer
//!
//! This crate provides the gate matrices used by the circuit editor, the
//! controlled-gate constructor, and the catalog that maps editor gate ids to
//! matrices.
//!
//! # Features
//!
//! - **Constant gate tables**: H, X, Y, Z, S, T, √X, √Y and their adjoints,
//!   CNOT, CZ, Toffoli and CCZ
//! - **Parameterized gates**: RX, RY, RZ, the universal U gate, Pauli-turn
//!   rotations and controlled rotations
//! - **Controlled-gate construction**: [`matrices::control_mat`] with the
//!   same operand order the state vector uses
//! - **Explicit catalog**: [`GateCatalog`] resolves ids to a typed [`GateKind`]
//!
//! # Example
//!
//! ```
//! use qcomposer_gates::{GateCatalog, GateKind, Params};
//! use qcomposer_gates::matrices;
//!
//! let catalog = GateCatalog::standard();
//! let kind = catalog.resolve("CNOT", &Params::new());
//! assert_eq!(kind, GateKind::Cnot);
//! assert_eq!(kind.matrix().unwrap(), matrices::cnot());
//! ```

pub mod catalog;
pub mod error;
pub mod kind;
pub mod matrices;

pub use catalog::{GateCatalog, GateDefinition, MatrixBuilder, ParamSpec, Params};
pub use error::{GateError, Result};
pub use kind::{Axis, GateKind, StandardGate};
