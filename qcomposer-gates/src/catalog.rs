//! Gate catalog mapping editor identifiers to gate definitions
//!
//! The catalog is an ordinary value: build one with
//! [`GateCatalog::standard`], register extra gates, and hand it to whatever
//! applies gates. Nothing in the simulator reads a global table.
//!
//! # Example
//!
//! ```rust
//! use qcomposer_gates::catalog::{GateCatalog, GateDefinition, Params};
//! use qcomposer_gates::matrices;
//!
//! let mut catalog = GateCatalog::standard();
//! let xh = matrices::hadamard().multiply(&matrices::pauli_x()).unwrap();
//! catalog.register(GateDefinition::fixed("XH", "X then H", xh).unwrap());
//!
//! let matrix = catalog.get("XH").unwrap().base_matrix().unwrap();
//! assert_eq!(matrix.rows(), 2);
//! assert!(catalog.resolve("Nope", &Params::new()).matrix().is_none());
//! ```

use crate::error::{GateError, Result};
use crate::kind::{GateKind, StandardGate};
use qcomposer_core::Matrix;
use std::collections::HashMap;
use std::fmt;

/// Named gate parameters, e.g. `{"theta": 1.57}`
pub type Params = HashMap<String, f64>;

/// Builds a custom gate matrix from parameters with defaults already applied
pub type MatrixBuilder = fn(&Params) -> Matrix;

/// A named gate parameter and its default value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: f64,
}

impl ParamSpec {
    pub const fn new(name: &'static str, default: f64) -> Self {
        Self { name, default }
    }

    /// Value from `params`, or the default when absent
    #[inline]
    pub fn value_in(&self, params: &Params) -> f64 {
        params.get(self.name).copied().unwrap_or(self.default)
    }
}

#[derive(Clone)]
enum GateSource {
    Standard(StandardGate),
    Fixed(Matrix),
    Parametric(MatrixBuilder),
}

/// A catalog entry
#[derive(Clone)]
pub struct GateDefinition {
    id: String,
    name: String,
    parameters: Vec<ParamSpec>,
    source: GateSource,
}

impl GateDefinition {
    /// Definition for a built-in gate
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            id: gate.id().to_string(),
            name: gate.name().to_string(),
            parameters: gate.parameters().to_vec(),
            source: GateSource::Standard(gate),
        }
    }

    /// Custom gate with a fixed matrix
    ///
    /// # Errors
    /// Returns [`GateError::InvalidGateMatrix`] unless `matrix` is square with
    /// a power-of-two dimension
    pub fn fixed(id: impl Into<String>, name: impl Into<String>, matrix: Matrix) -> Result<Self> {
        if matrix.num_qubits().is_none() {
            return Err(GateError::InvalidGateMatrix {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            parameters: Vec::new(),
            source: GateSource::Fixed(matrix),
        })
    }

    /// Custom gate whose matrix is rebuilt from parameters on each use
    pub fn parametric(
        id: impl Into<String>,
        name: impl Into<String>,
        parameters: Vec<ParamSpec>,
        builder: MatrixBuilder,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parameters,
            source: GateSource::Parametric(builder),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParamSpec] {
        &self.parameters
    }

    /// Parameter names, in declaration order
    pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parameters.iter().map(|p| p.name)
    }

    /// `params` with declared defaults filled in
    pub fn resolve_params(&self, params: &Params) -> Params {
        let mut resolved = params.clone();
        for spec in &self.parameters {
            resolved.entry(spec.name.to_string()).or_insert(spec.default);
        }
        resolved
    }

    /// Resolve this definition into a concrete gate
    pub fn bind(&self, params: &Params) -> GateKind {
        match &self.source {
            GateSource::Standard(gate) => gate.bind(params),
            GateSource::Fixed(matrix) => GateKind::Custom {
                id: self.id.clone(),
                matrix: matrix.clone(),
            },
            GateSource::Parametric(builder) => GateKind::Custom {
                id: self.id.clone(),
                matrix: builder(&self.resolve_params(params)),
            },
        }
    }

    /// Gate matrix for the given parameters
    pub fn matrix(&self, params: &Params) -> Option<Matrix> {
        self.bind(params).matrix()
    }

    /// Gate matrix with every parameter at its default
    pub fn base_matrix(&self) -> Option<Matrix> {
        self.matrix(&Params::new())
    }
}

impl fmt::Debug for GateDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            GateSource::Standard(gate) => format!("Standard({:?})", gate),
            GateSource::Fixed(matrix) => format!("Fixed({}x{})", matrix.rows(), matrix.cols()),
            GateSource::Parametric(_) => "Parametric".to_string(),
        };
        f.debug_struct("GateDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("source", &source)
            .finish()
    }
}

/// Registry of gate definitions keyed by editor identifier
#[derive(Debug, Clone)]
pub struct GateCatalog {
    gates: HashMap<String, GateDefinition>,
}

impl GateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            gates: HashMap::new(),
        }
    }

    /// Catalog holding every [`StandardGate`]
    ///
    /// `"Toffoli"` is registered as an alias of `"CCNOT"`.
    pub fn standard() -> Self {
        let mut catalog = Self {
            gates: HashMap::with_capacity(StandardGate::ALL.len() + StandardGate::ALIASES.len()),
        };
        for gate in StandardGate::ALL {
            catalog.register(GateDefinition::standard(gate));
        }
        for (alias, gate) in StandardGate::ALIASES {
            catalog
                .gates
                .insert(alias.to_string(), GateDefinition::standard(gate));
        }
        catalog
    }

    /// Register a definition under its id
    ///
    /// If a gate with the same id already exists, it will be replaced.
    pub fn register(&mut self, definition: GateDefinition) {
        self.gates.insert(definition.id.clone(), definition);
    }

    pub fn get(&self, id: &str) -> Option<&GateDefinition> {
        self.gates.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.gates.contains_key(id)
    }

    /// Remove a definition
    pub fn unregister(&mut self, id: &str) -> Option<GateDefinition> {
        self.gates.remove(id)
    }

    /// Registered ids, sorted
    pub fn gate_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.gates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Resolve an identifier and parameters into a gate
    ///
    /// Unknown identifiers resolve to [`GateKind::Unrecognized`].
    pub fn resolve(&self, id: &str, params: &Params) -> GateKind {
        match self.gates.get(id) {
            Some(definition) => definition.bind(params),
            None => GateKind::Unrecognized(id.to_string()),
        }
    }
}

impl Default for GateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
