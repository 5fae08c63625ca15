//! Core algebra types for the qcomposer state-vector simulator
//!
//! This crate provides the numeric building blocks shared by the gate
//! library and the state vector:
//! - [`Complex`]: complex scalar (an alias of `num_complex::Complex64`) with
//!   tolerance-based comparison through [`ComplexExt`]
//! - [`Matrix`]: dense, row-major complex matrix with bounds-checked access,
//!   multiplication and Kronecker products
//!
//! # Example
//! ```
//! use qcomposer_core::{tensor_product, Complex64, Matrix};
//!
//! let x = Matrix::from_rows([
//!     [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
//!     [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
//! ]);
//! let xx = x.multiply(&x).unwrap();
//! assert_eq!(xx, Matrix::identity(2));
//!
//! let two_qubit = tensor_product(&x, &Matrix::identity(2));
//! assert_eq!(two_qubit.rows(), 4);
//! ```

pub mod complex;
pub mod error;
pub mod matrix;

pub use complex::{Complex, ComplexExt};
pub use error::MatrixError;
pub use matrix::{tensor_product, Matrix};
pub use num_complex::Complex64;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
