//! Standard gate matrices
//!
//! Fixed gates are stored as constant row arrays and exposed as [`Matrix`]
//! values through small constructor functions. Parametric gates are rebuilt
//! on every call from their angles.
//!
//! # Operand order
//!
//! Multi-qubit matrices index their rows and columns with a *local* basis
//! index whose most significant bit belongs to the first operand. For CNOT
//! applied to `[control, target]` the local index is `control·2 + target`,
//! so `|10⟩ ↦ |11⟩`. [`control_mat`] follows the same layout: control
//! operands take the high bits, the target matrix the low bits. The state
//! vector uses this ordering when it maps operands onto register qubits.

use crate::error::{GateError, Result};
use qcomposer_core::complex::{I, NEG_I, NEG_ONE, ONE, ZERO};
use qcomposer_core::Matrix;
use num_complex::Complex64;
use std::f64::consts::PI;

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

// Single-qubit gate matrices (2x2)

/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
];

/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [[ZERO, NEG_I], [I, ZERO]];

/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

pub const IDENTITY: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ONE]];

/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

pub const S_GATE_DAGGER: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_I]];

/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)],
];

/// T† = [[1, 0],
///       [0, e^(-iπ/4)]]
pub const T_GATE_DAGGER: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)],
];

/// √X = 1/2 * [[1+i, 1-i],
///             [1-i, 1+i]]
pub const SQRT_X: [[Complex64; 2]; 2] = [
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
];

pub const SQRT_X_DAGGER: [[Complex64; 2]; 2] = [
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
];

/// √Y = 1/2 * [[1+i, -1-i],
///             [1+i,  1+i]]
pub const SQRT_Y: [[Complex64; 2]; 2] = [
    [Complex64::new(0.5, 0.5), Complex64::new(-0.5, -0.5)],
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, 0.5)],
];

pub const SQRT_Y_DAGGER: [[Complex64; 2]; 2] = [
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(-0.5, 0.5), Complex64::new(0.5, -0.5)],
];

// Two-qubit gate matrices (4x4), operands [control, target]

/// |10⟩ ↦ |11⟩, |11⟩ ↦ |10⟩
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// |11⟩ ↦ -|11⟩
pub const CZ: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, NEG_ONE],
];

// Three-qubit gate matrices (8x8), operands [control1, control2, target]

/// Swaps |110⟩ and |111⟩
pub const TOFFOLI: [[Complex64; 8]; 8] = [
    [ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO],
];

/// |111⟩ ↦ -|111⟩
pub const CCZ: [[Complex64; 8]; 8] = [
    [ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, NEG_ONE],
];

#[inline]
pub fn hadamard() -> Matrix {
    Matrix::from_rows(HADAMARD)
}

#[inline]
pub fn identity() -> Matrix {
    Matrix::from_rows(IDENTITY)
}

#[inline]
pub fn pauli_x() -> Matrix {
    Matrix::from_rows(PAULI_X)
}

#[inline]
pub fn pauli_y() -> Matrix {
    Matrix::from_rows(PAULI_Y)
}

#[inline]
pub fn pauli_z() -> Matrix {
    Matrix::from_rows(PAULI_Z)
}

#[inline]
pub fn s() -> Matrix {
    Matrix::from_rows(S_GATE)
}

#[inline]
pub fn s_dagger() -> Matrix {
    Matrix::from_rows(S_GATE_DAGGER)
}

#[inline]
pub fn t() -> Matrix {
    Matrix::from_rows(T_GATE)
}

#[inline]
pub fn t_dagger() -> Matrix {
    Matrix::from_rows(T_GATE_DAGGER)
}

#[inline]
pub fn sqrt_x() -> Matrix {
    Matrix::from_rows(SQRT_X)
}

#[inline]
pub fn sqrt_x_dagger() -> Matrix {
    Matrix::from_rows(SQRT_X_DAGGER)
}

#[inline]
pub fn sqrt_y() -> Matrix {
    Matrix::from_rows(SQRT_Y)
}

#[inline]
pub fn sqrt_y_dagger() -> Matrix {
    Matrix::from_rows(SQRT_Y_DAGGER)
}

#[inline]
pub fn cnot() -> Matrix {
    Matrix::from_rows(CNOT)
}

#[inline]
pub fn cz() -> Matrix {
    Matrix::from_rows(CZ)
}

#[inline]
pub fn toffoli() -> Matrix {
    Matrix::from_rows(TOFFOLI)
}

#[inline]
pub fn ccz() -> Matrix {
    Matrix::from_rows(CCZ)
}

// Parameterized gate matrix generators

/// RX(θ) = cos(θ/2)·I − i·sin(θ/2)·X
///       = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
pub fn rotation_x(theta: f64) -> Matrix {
    let half_theta = theta / 2.0;
    let cos_val = half_theta.cos();
    let sin_val = half_theta.sin();

    Matrix::from_rows([
        [Complex64::new(cos_val, 0.0), Complex64::new(0.0, -sin_val)],
        [Complex64::new(0.0, -sin_val), Complex64::new(cos_val, 0.0)],
    ])
}

/// RY(θ) = [[cos(θ/2),  -sin(θ/2)],
///          [sin(θ/2),   cos(θ/2)]]
pub fn rotation_y(theta: f64) -> Matrix {
    let half_theta = theta / 2.0;
    let cos_val = half_theta.cos();
    let sin_val = half_theta.sin();

    Matrix::from_rows([
        [Complex64::new(cos_val, 0.0), Complex64::new(-sin_val, 0.0)],
        [Complex64::new(sin_val, 0.0), Complex64::new(cos_val, 0.0)],
    ])
}

/// RZ(θ) = [[e^(-iθ/2),  0       ],
///          [0,          e^(iθ/2)]]
pub fn rotation_z(theta: f64) -> Matrix {
    let half_theta = theta / 2.0;

    Matrix::from_rows([
        [Complex64::from_polar(1.0, -half_theta), ZERO],
        [ZERO, Complex64::from_polar(1.0, half_theta)],
    ])
}

/// Universal single-qubit gate (U3 convention)
///
/// U(θ,φ,λ) = [[cos(θ/2),              -e^(iλ)·sin(θ/2)    ],
///             [e^(iφ)·sin(θ/2),        e^(i(φ+λ))·cos(θ/2)]]
pub fn universal(theta: f64, phi: f64, lambda: f64) -> Matrix {
    let half_theta = theta / 2.0;
    let cos_val = half_theta.cos();
    let sin_val = half_theta.sin();

    Matrix::from_rows([
        [
            Complex64::new(cos_val, 0.0),
            -Complex64::from_polar(sin_val, lambda),
        ],
        [
            Complex64::from_polar(sin_val, phi),
            Complex64::from_polar(cos_val, phi + lambda),
        ],
    ])
}

/// Rotation about an arbitrary Pauli axis, measured in turns
///
/// A full turn is 2π, so `from_pauli_rotation(0.25, 0.0, 0.0)` equals
/// `rotation_x(π/2)`. The turn vector `(x, y, z)` gives both the axis and the
/// angle: `exp(-iπ·(x·X + y·Y + z·Z))`.
pub fn from_pauli_rotation(x_turns: f64, y_turns: f64, z_turns: f64) -> Matrix {
    let norm = (x_turns * x_turns + y_turns * y_turns + z_turns * z_turns).sqrt();
    if norm < 1e-10 {
        return identity();
    }

    let theta = 2.0 * PI * norm;
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    let scale = s / norm;

    let ix = scale * x_turns;
    let iy = scale * y_turns;
    let iz = scale * z_turns;

    Matrix::from_rows([
        [Complex64::new(c, -iz), Complex64::new(-iy, -ix)],
        [Complex64::new(iy, -ix), Complex64::new(c, iz)],
    ])
}

/// Embed `target` as the all-controls-set block of a controlled gate
///
/// The result has dimension `2^(control_count + k)` where `target` is
/// `2^k × 2^k`. It is the identity except for the bottom-right block,
/// addressed by local indices whose `control_count` high bits are all 1,
/// which holds `target`. Operands are therefore `[controls..., targets...]`.
///
/// # Errors
/// Returns [`GateError::InvalidGateMatrix`] if `target` is not a square
/// power-of-two matrix
///
/// # Example
/// ```
/// use qcomposer_gates::matrices::{cnot, control_mat, pauli_x};
///
/// let controlled_x = control_mat(1, &pauli_x()).unwrap();
/// assert_eq!(controlled_x, cnot());
/// ```
pub fn control_mat(control_count: usize, target: &Matrix) -> Result<Matrix> {
    let target_qubits = target.num_qubits().ok_or(GateError::InvalidGateMatrix {
        rows: target.rows(),
        cols: target.cols(),
    })?;

    let target_dim = 1usize << target_qubits;
    let dim = 1usize << (control_count + target_qubits);
    let offset = dim - target_dim;

    let mut result = Matrix::identity(dim);
    for i in 0..target_dim {
        for j in 0..target_dim {
            result.set(offset + i, offset + j, target[(i, j)])?;
        }
    }
    Ok(result)
}

pub fn controlled_rotation_x(theta: f64) -> Result<Matrix> {
    control_mat(1, &rotation_x(theta))
}

pub fn controlled_rotation_y(theta: f64) -> Result<Matrix> {
    control_mat(1, &rotation_y(theta))
}

pub fn controlled_rotation_z(theta: f64) -> Result<Matrix> {
    control_mat(1, &rotation_z(theta))
}
