//! Typed gate kinds
//!
//! [`StandardGate`] names every gate the editor knows about, independent of
//! parameter values. Binding it to a parameter map produces a [`GateKind`],
//! the fully resolved operation that knows its matrix and how many operands
//! it takes. Identifiers that nothing recognises become
//! [`GateKind::Unrecognized`] so callers can report and skip them.

use crate::catalog::{ParamSpec, Params};
use crate::matrices;
use qcomposer_core::Matrix;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Pauli axis used by rotation and routing gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

const THETA: ParamSpec = ParamSpec::new("theta", FRAC_PI_2);
const PHI: ParamSpec = ParamSpec::new("phi", 0.0);
const LAMBDA: ParamSpec = ParamSpec::new("lambda", 0.0);

const NO_PARAMS: &[ParamSpec] = &[];
const ROTATION_PARAMS: &[ParamSpec] = &[THETA];
const UNIVERSAL_PARAMS: &[ParamSpec] = &[THETA, PHI, LAMBDA];

/// Built-in gate identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardGate {
    H,
    I,
    X,
    Y,
    Z,
    S,
    Sdg,
    T,
    Tdg,
    SqrtX,
    SqrtXdg,
    SqrtY,
    SqrtYdg,
    Rx,
    Ry,
    Rz,
    U,
    Cnot,
    Cz,
    Crx,
    Cry,
    Crz,
    Ccnot,
    Ccz,
    Barrier,
    RouteX,
    RouteY,
    RouteZ,
}

impl StandardGate {
    pub const ALL: [StandardGate; 28] = [
        StandardGate::H,
        StandardGate::I,
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::S,
        StandardGate::Sdg,
        StandardGate::T,
        StandardGate::Tdg,
        StandardGate::SqrtX,
        StandardGate::SqrtXdg,
        StandardGate::SqrtY,
        StandardGate::SqrtYdg,
        StandardGate::Rx,
        StandardGate::Ry,
        StandardGate::Rz,
        StandardGate::U,
        StandardGate::Cnot,
        StandardGate::Cz,
        StandardGate::Crx,
        StandardGate::Cry,
        StandardGate::Crz,
        StandardGate::Ccnot,
        StandardGate::Ccz,
        StandardGate::Barrier,
        StandardGate::RouteX,
        StandardGate::RouteY,
        StandardGate::RouteZ,
    ];

    /// Identifier used by the circuit editor
    pub const fn id(self) -> &'static str {
        match self {
            StandardGate::H => "H",
            StandardGate::I => "I",
            StandardGate::X => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::S => "S",
            StandardGate::Sdg => "Sdg",
            StandardGate::T => "T",
            StandardGate::Tdg => "Td",
            StandardGate::SqrtX => "SX",
            StandardGate::SqrtXdg => "SXdg",
            StandardGate::SqrtY => "SY",
            StandardGate::SqrtYdg => "SYdg",
            StandardGate::Rx => "Rx",
            StandardGate::Ry => "Ry",
            StandardGate::Rz => "Rz",
            StandardGate::U => "U",
            StandardGate::Cnot => "CNOT",
            StandardGate::Cz => "CZ",
            StandardGate::Crx => "CRx",
            StandardGate::Cry => "CRy",
            StandardGate::Crz => "CRz",
            StandardGate::Ccnot => "CCNOT",
            StandardGate::Ccz => "CCZ",
            StandardGate::Barrier => "Barrier",
            StandardGate::RouteX => "RouteX",
            StandardGate::RouteY => "RouteY",
            StandardGate::RouteZ => "RouteZ",
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            StandardGate::H => "Hadamard",
            StandardGate::I => "Identity",
            StandardGate::X => "Pauli-X",
            StandardGate::Y => "Pauli-Y",
            StandardGate::Z => "Pauli-Z",
            StandardGate::S => "S Gate",
            StandardGate::Sdg => "S-dagger",
            StandardGate::T => "T Gate",
            StandardGate::Tdg => "T-dagger",
            StandardGate::SqrtX => "Square root of X",
            StandardGate::SqrtXdg => "Square root of X, adjoint",
            StandardGate::SqrtY => "Square root of Y",
            StandardGate::SqrtYdg => "Square root of Y, adjoint",
            StandardGate::Rx => "X-Rotation",
            StandardGate::Ry => "Y-Rotation",
            StandardGate::Rz => "Z-Rotation",
            StandardGate::U => "Universal Gate",
            StandardGate::Cnot => "Controlled-NOT",
            StandardGate::Cz => "Controlled-Z",
            StandardGate::Crx => "Controlled X-Rotation",
            StandardGate::Cry => "Controlled Y-Rotation",
            StandardGate::Crz => "Controlled Z-Rotation",
            StandardGate::Ccnot => "Toffoli",
            StandardGate::Ccz => "Controlled-Controlled-Z",
            StandardGate::Barrier => "Barrier",
            StandardGate::RouteX => "Route X",
            StandardGate::RouteY => "Route Y",
            StandardGate::RouteZ => "Route Z",
        }
    }

    /// Alternative editor identifiers and the gate each one names
    pub const ALIASES: [(&'static str, StandardGate); 2] =
        [("Toffoli", StandardGate::Ccnot), ("Tdg", StandardGate::Tdg)];

    /// Look up a gate by editor identifier or one of its [`ALIASES`](Self::ALIASES)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == id)
            .map(|&(_, gate)| gate)
            .or_else(|| Self::ALL.iter().copied().find(|gate| gate.id() == id))
    }

    /// Parameters accepted by the gate, with defaults
    pub const fn parameters(self) -> &'static [ParamSpec] {
        match self {
            StandardGate::Rx
            | StandardGate::Ry
            | StandardGate::Rz
            | StandardGate::Crx
            | StandardGate::Cry
            | StandardGate::Crz => ROTATION_PARAMS,
            StandardGate::U => UNIVERSAL_PARAMS,
            _ => NO_PARAMS,
        }
    }

    /// Resolve parameter values (missing ones take their defaults)
    pub fn bind(self, params: &Params) -> GateKind {
        let theta = || THETA.value_in(params);

        match self {
            StandardGate::H => GateKind::Hadamard,
            StandardGate::I => GateKind::Identity,
            StandardGate::X => GateKind::PauliX,
            StandardGate::Y => GateKind::PauliY,
            StandardGate::Z => GateKind::PauliZ,
            StandardGate::S => GateKind::S,
            StandardGate::Sdg => GateKind::SDagger,
            StandardGate::T => GateKind::T,
            StandardGate::Tdg => GateKind::TDagger,
            StandardGate::SqrtX => GateKind::SqrtX,
            StandardGate::SqrtXdg => GateKind::SqrtXDagger,
            StandardGate::SqrtY => GateKind::SqrtY,
            StandardGate::SqrtYdg => GateKind::SqrtYDagger,
            StandardGate::Rx => GateKind::Rotation {
                axis: Axis::X,
                theta: theta(),
            },
            StandardGate::Ry => GateKind::Rotation {
                axis: Axis::Y,
                theta: theta(),
            },
            StandardGate::Rz => GateKind::Rotation {
                axis: Axis::Z,
                theta: theta(),
            },
            StandardGate::U => GateKind::Universal {
                theta: theta(),
                phi: PHI.value_in(params),
                lambda: LAMBDA.value_in(params),
            },
            StandardGate::Cnot => GateKind::Cnot,
            StandardGate::Cz => GateKind::Cz,
            StandardGate::Crx => GateKind::ControlledRotation {
                axis: Axis::X,
                theta: theta(),
            },
            StandardGate::Cry => GateKind::ControlledRotation {
                axis: Axis::Y,
                theta: theta(),
            },
            StandardGate::Crz => GateKind::ControlledRotation {
                axis: Axis::Z,
                theta: theta(),
            },
            StandardGate::Ccnot => GateKind::Toffoli,
            StandardGate::Ccz => GateKind::Ccz,
            StandardGate::Barrier => GateKind::Barrier,
            StandardGate::RouteX => GateKind::Route(Axis::X),
            StandardGate::RouteY => GateKind::Route(Axis::Y),
            StandardGate::RouteZ => GateKind::Route(Axis::Z),
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A resolved gate operation
///
/// Parametric variants carry their angles; [`GateKind::Custom`] carries a
/// matrix registered by the embedding application.
#[derive(Debug, Clone, PartialEq)]
pub enum GateKind {
    Hadamard,
    Identity,
    PauliX,
    PauliY,
    PauliZ,
    S,
    SDagger,
    T,
    TDagger,
    SqrtX,
    SqrtXDagger,
    SqrtY,
    SqrtYDagger,
    Rotation { axis: Axis, theta: f64 },
    Universal { theta: f64, phi: f64, lambda: f64 },
    Cnot,
    Cz,
    ControlledRotation { axis: Axis, theta: f64 },
    Toffoli,
    Ccz,
    Custom { id: String, matrix: Matrix },
    /// Visual separator; leaves the state untouched
    Barrier,
    /// Layout-only routing marker; leaves the state untouched
    Route(Axis),
    Unrecognized(String),
}

impl GateKind {
    /// Unitary matrix for this gate
    ///
    /// `None` for barriers, routing markers and unrecognized gates.
    pub fn matrix(&self) -> Option<Matrix> {
        let matrix = match self {
            GateKind::Hadamard => matrices::hadamard(),
            GateKind::Identity => matrices::identity(),
            GateKind::PauliX => matrices::pauli_x(),
            GateKind::PauliY => matrices::pauli_y(),
            GateKind::PauliZ => matrices::pauli_z(),
            GateKind::S => matrices::s(),
            GateKind::SDagger => matrices::s_dagger(),
            GateKind::T => matrices::t(),
            GateKind::TDagger => matrices::t_dagger(),
            GateKind::SqrtX => matrices::sqrt_x(),
            GateKind::SqrtXDagger => matrices::sqrt_x_dagger(),
            GateKind::SqrtY => matrices::sqrt_y(),
            GateKind::SqrtYDagger => matrices::sqrt_y_dagger(),
            GateKind::Rotation { axis, theta } => rotation(*axis, *theta),
            GateKind::Universal { theta, phi, lambda } => {
                matrices::universal(*theta, *phi, *lambda)
            }
            GateKind::Cnot => matrices::cnot(),
            GateKind::Cz => matrices::cz(),
            GateKind::ControlledRotation { axis, theta } => {
                // A 2x2 rotation is always a valid control target
                matrices::control_mat(1, &rotation(*axis, *theta)).ok()?
            }
            GateKind::Toffoli => matrices::toffoli(),
            GateKind::Ccz => matrices::ccz(),
            GateKind::Custom { matrix, .. } => matrix.clone(),
            GateKind::Barrier | GateKind::Route(_) | GateKind::Unrecognized(_) => return None,
        };
        Some(matrix)
    }

    /// Number of qubit operands, 0 for gates without a matrix
    pub fn num_qubits(&self) -> usize {
        match self {
            GateKind::Cnot | GateKind::Cz | GateKind::ControlledRotation { .. } => 2,
            GateKind::Toffoli | GateKind::Ccz => 3,
            GateKind::Custom { matrix, .. } => matrix.num_qubits().unwrap_or(0),
            GateKind::Barrier | GateKind::Route(_) | GateKind::Unrecognized(_) => 0,
            _ => 1,
        }
    }

    /// Whether the gate only affects circuit layout
    pub fn is_no_op(&self) -> bool {
        matches!(self, GateKind::Barrier | GateKind::Route(_))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, GateKind::Unrecognized(_))
    }
}

fn rotation(axis: Axis, theta: f64) -> Matrix {
    match axis {
        Axis::X => matrices::rotation_x(theta),
        Axis::Y => matrices::rotation_y(theta),
        Axis::Z => matrices::rotation_z(theta),
    }
}
