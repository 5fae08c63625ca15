//! Circuit execution results

use crate::statistics::ExecutionStatistics;
use qcomposer_state::LabeledAmplitudes;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Non-fatal problem found while executing a circuit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SimulationWarning {
    /// Gate type missing from the catalog; the placement was skipped
    UnknownGate {
        placement: usize,
        #[serde(rename = "gateType")]
        gate_type: String,
    },

    /// Multi-qubit placement without one of its operand fields
    MissingOperand {
        placement: usize,
        #[serde(rename = "gateType")]
        gate_type: String,
        operand: &'static str,
    },

    /// Final norm drifted further from 1 than the configured tolerance
    NormDrift { norm: f64, tolerance: f64 },
}

impl fmt::Display for SimulationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationWarning::UnknownGate {
                placement,
                gate_type,
            } => write!(f, "Placement {}: unknown gate type '{}'", placement, gate_type),
            SimulationWarning::MissingOperand {
                placement,
                gate_type,
                operand,
            } => write!(
                f,
                "Placement {}: {} gate has no {} qubit",
                placement, gate_type, operand
            ),
            SimulationWarning::NormDrift { norm, tolerance } => write!(
                f,
                "Final norm {:.12} differs from 1 by more than {}",
                norm, tolerance
            ),
        }
    }
}

/// Final state of a circuit run, shaped for the visualization layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// All amplitudes with their basis labels
    pub state_vector: LabeledAmplitudes,

    /// Probabilities above the configured threshold, keyed by basis label
    pub probabilities: BTreeMap<String, f64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SimulationWarning>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ExecutionStatistics>,
}

impl ExecutionResult {
    /// Probability of a basis label, 0 when it fell under the threshold
    pub fn probability(&self, label: &str) -> f64 {
        self.probabilities.get(label).copied().unwrap_or(0.0)
    }

    /// Most likely basis label
    pub fn most_likely(&self) -> Option<(&str, f64)> {
        self.probabilities
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(label, &p)| (label.as_str(), p))
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Execution Result:")?;
        for (label, p) in &self.probabilities {
            writeln!(f, "  |{}⟩: {:.6}", label, p)?;
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {}", warning)?;
        }
        if let Some(stats) = &self.statistics {
            write!(f, "\n{}", stats)?;
        }
        Ok(())
    }
}
