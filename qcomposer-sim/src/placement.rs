//! Gate placements produced by the circuit editor

use qcomposer_gates::Params;
use serde::{Deserialize, Serialize};

/// One gate dropped onto the circuit grid
///
/// Deserializes from the editor's JSON:
///
/// ```
/// use qcomposer_sim::GatePlacement;
///
/// let json = r#"{"timeColumn": 2, "gateType": "CNOT", "qubit": 0, "control": 0, "target": 1}"#;
/// let placement: GatePlacement = serde_json::from_str(json).unwrap();
/// assert_eq!(placement, GatePlacement::controlled(2, "CNOT", 0, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatePlacement {
    /// Column on the circuit grid; placements run in ascending column order
    pub time_column: usize,

    /// Catalog id such as `"H"` or `"CNOT"`
    pub gate_type: String,

    /// Row the gate was dropped on; the operand of single-qubit gates
    pub qubit: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<usize>,

    /// Second control of three-qubit gates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control2: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,

    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl GatePlacement {
    /// Single-qubit gate on `qubit`
    pub fn single(time_column: usize, gate_type: impl Into<String>, qubit: usize) -> Self {
        Self {
            time_column,
            gate_type: gate_type.into(),
            qubit,
            control: None,
            control2: None,
            target: None,
            params: Params::new(),
        }
    }

    /// Two-qubit gate with operands `[control, target]`
    pub fn controlled(
        time_column: usize,
        gate_type: impl Into<String>,
        control: usize,
        target: usize,
    ) -> Self {
        Self {
            control: Some(control),
            target: Some(target),
            ..Self::single(time_column, gate_type, control)
        }
    }

    /// Three-qubit gate with operands `[control, control2, target]`
    pub fn doubly_controlled(
        time_column: usize,
        gate_type: impl Into<String>,
        control: usize,
        control2: usize,
        target: usize,
    ) -> Self {
        Self {
            control2: Some(control2),
            ..Self::controlled(time_column, gate_type, control, target)
        }
    }

    /// Set a gate parameter such as `theta`
    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }
}
