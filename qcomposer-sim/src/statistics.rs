//! Execution statistics tracking

use serde::Serialize;
use std::time::Duration;

/// Execution statistics for a circuit run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatistics {
    /// Total execution time
    pub total_time: Duration,

    /// Time spent applying gates
    pub gate_application_time: Duration,

    /// Number of placements in the circuit
    pub placements: usize,

    /// Placements whose matrix was applied
    pub gates_applied: usize,

    /// Barriers and routing markers
    pub gates_skipped: usize,

    /// Placements with an unknown gate type
    pub unknown_gates: usize,

    /// Multi-qubit placements skipped for a missing operand field
    pub missing_operands: usize,

    /// Norm of the final state
    pub final_norm: f64,
}

impl ExecutionStatistics {
    /// Create a new statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the gate execution rate (gates per second)
    pub fn gates_per_second(&self) -> f64 {
        let secs = self.gate_application_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.gates_applied as f64 / secs
        }
    }
}

impl std::fmt::Display for ExecutionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution Statistics:")?;
        writeln!(f, "  Total time: {:?}", self.total_time)?;
        writeln!(f, "    Gate application: {:?}", self.gate_application_time)?;

        writeln!(f, "\n  Gates:")?;
        writeln!(f, "    Placements: {}", self.placements)?;
        writeln!(f, "    Applied: {}", self.gates_applied)?;
        writeln!(f, "    Layout-only: {}", self.gates_skipped)?;
        writeln!(f, "    Unknown: {}", self.unknown_gates)?;
        writeln!(f, "    Missing operands: {}", self.missing_operands)?;
        writeln!(f, "    Execution rate: {:.0} gates/sec", self.gates_per_second())?;

        writeln!(f, "\n  State:")?;
        writeln!(f, "    Final norm: {:.12}", self.final_norm)?;

        Ok(())
    }
}
