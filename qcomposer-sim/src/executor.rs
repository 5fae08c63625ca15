//! Circuit executor

use crate::{
    config::ExecutorConfig,
    error::{Result, SimulatorError},
    placement::GatePlacement,
    result::{ExecutionResult, SimulationWarning},
    statistics::ExecutionStatistics,
};
use qcomposer_gates::{GateCatalog, GateKind, Params};
use qcomposer_state::{ApplyOutcome, LabeledAmplitudes, StateVector};
use smallvec::{smallvec, SmallVec};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Operand list of one placement; no standard gate takes more than three
type Operands = SmallVec<[usize; 3]>;

enum OperandError {
    Missing(&'static str),
    UnsupportedArity(usize),
}

/// Runs editor circuits on a state vector
///
/// The executor owns one [`StateVector`] for its lifetime. Each call to
/// [`execute_circuit`](Self::execute_circuit) continues from the current
/// state; start a fresh executor for a fresh run.
///
/// # Example
///
/// ```
/// use qcomposer_gates::GateCatalog;
/// use qcomposer_sim::{CircuitExecutor, GatePlacement};
/// use std::sync::Arc;
///
/// let catalog = Arc::new(GateCatalog::standard());
/// let mut executor = CircuitExecutor::new(2, catalog).unwrap();
///
/// let circuit = vec![
///     GatePlacement::single(0, "X", 0),
///     GatePlacement::controlled(1, "CNOT", 0, 1),
/// ];
/// let result = executor.execute_circuit(&circuit).unwrap();
/// assert_eq!(result.probability("11"), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct CircuitExecutor {
    state: StateVector,
    catalog: Arc<GateCatalog>,
    config: ExecutorConfig,
}

impl CircuitExecutor {
    /// Create an executor over `num_qubits` qubits in |0...0⟩
    pub fn new(num_qubits: usize, catalog: Arc<GateCatalog>) -> Result<Self> {
        Self::with_config(num_qubits, catalog, ExecutorConfig::default())
    }

    /// Create an executor with a custom configuration
    ///
    /// # Errors
    /// - [`SimulatorError::InvalidConfig`] if the configuration does not validate
    /// - [`SimulatorError::TooManyQubits`] if `num_qubits` exceeds `config.max_qubits`
    pub fn with_config(
        num_qubits: usize,
        catalog: Arc<GateCatalog>,
        config: ExecutorConfig,
    ) -> Result<Self> {
        config.validate()?;
        if num_qubits > config.max_qubits {
            return Err(SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits: config.max_qubits,
            });
        }

        Ok(Self {
            state: StateVector::new(num_qubits)?,
            catalog,
            config,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &GateCatalog {
        &self.catalog
    }

    /// The underlying state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Run a circuit and report the final state
    ///
    /// Placements are applied in ascending `time_column` order; placements
    /// sharing a column keep their relative order. Overlapping placements in
    /// one column are not detected.
    ///
    /// Unknown gate types and multi-qubit placements missing an operand field
    /// are logged, recorded as warnings and skipped. Barriers and routing
    /// markers leave the state untouched.
    ///
    /// # Errors
    /// Returns [`SimulatorError::GateApplicationFailed`] when a recognized
    /// gate cannot be applied, e.g. an operand outside the register
    pub fn execute_circuit(&mut self, placements: &[GatePlacement]) -> Result<ExecutionResult> {
        let total_start = Instant::now();

        let mut ordered: Vec<(usize, &GatePlacement)> = placements.iter().enumerate().collect();
        ordered.sort_by_key(|(_, placement)| placement.time_column);

        let mut stats = ExecutionStatistics {
            placements: placements.len(),
            ..Default::default()
        };
        let mut warnings = Vec::new();
        let mut gate_time = Duration::ZERO;

        for (index, placement) in ordered {
            let kind = self.catalog.resolve(&placement.gate_type, &placement.params);

            if !kind.is_recognized() {
                warn!(
                    placement = index,
                    gate = %placement.gate_type,
                    "unknown gate type, skipping"
                );
                warnings.push(SimulationWarning::UnknownGate {
                    placement: index,
                    gate_type: placement.gate_type.clone(),
                });
                stats.unknown_gates += 1;
                continue;
            }

            if kind.is_no_op() {
                stats.gates_skipped += 1;
                continue;
            }

            let operands = match operands_for(&kind, placement) {
                Ok(operands) => operands,
                Err(OperandError::Missing(operand)) => {
                    warn!(
                        placement = index,
                        gate = %placement.gate_type,
                        operand,
                        "placement is missing an operand, skipping"
                    );
                    warnings.push(SimulationWarning::MissingOperand {
                        placement: index,
                        gate_type: placement.gate_type.clone(),
                        operand,
                    });
                    stats.missing_operands += 1;
                    continue;
                }
                Err(OperandError::UnsupportedArity(arity)) => {
                    return Err(SimulatorError::GateApplicationFailed {
                        gate_index: index,
                        gate_type: placement.gate_type.clone(),
                        reason: format!("no operand layout for a {}-qubit gate", arity),
                    });
                }
            };

            let gate_start = Instant::now();
            self.state.apply_kind(&kind, &operands).map_err(|err| {
                SimulatorError::GateApplicationFailed {
                    gate_index: index,
                    gate_type: placement.gate_type.clone(),
                    reason: err.to_string(),
                }
            })?;
            gate_time += gate_start.elapsed();
            stats.gates_applied += 1;

            debug!(
                placement = index,
                column = placement.time_column,
                gate = %placement.gate_type,
                operands = ?operands.as_slice(),
                "applied gate"
            );
        }

        let norm = self.state.norm();
        if let Some(tolerance) = self.config.norm_tolerance {
            if (norm - 1.0).abs() > tolerance {
                warn!(norm, tolerance, "final state norm drifted");
                warnings.push(SimulationWarning::NormDrift { norm, tolerance });
            }
        }

        stats.gate_application_time = gate_time;
        stats.final_norm = norm;
        stats.total_time = total_start.elapsed();

        info!(
            qubits = self.num_qubits(),
            placements = stats.placements,
            applied = stats.gates_applied,
            warnings = warnings.len(),
            elapsed_us = stats.total_time.as_micros() as u64,
            "circuit executed"
        );

        Ok(ExecutionResult {
            state_vector: self.state.to_labeled_format(),
            probabilities: self.measurement_probabilities(),
            warnings,
            statistics: self.config.collect_statistics.then_some(stats),
        })
    }

    /// Apply a single-qubit catalog gate
    pub fn apply_gate(
        &mut self,
        gate_id: &str,
        qubit: usize,
        params: &Params,
    ) -> Result<ApplyOutcome> {
        Ok(self.state.apply_gate(&self.catalog, gate_id, &[qubit], params)?)
    }

    /// Apply a catalog gate to an ordered operand list
    pub fn apply_multi_qubit_gate(
        &mut self,
        gate_id: &str,
        qubits: &[usize],
        params: &Params,
    ) -> Result<ApplyOutcome> {
        Ok(self.state.apply_gate(&self.catalog, gate_id, qubits, params)?)
    }

    /// Apply a catalog gate to `target` only where `control` is 1
    ///
    /// Parametric gates use their default parameters.
    pub fn apply_controlled_gate(
        &mut self,
        gate_id: &str,
        control: usize,
        target: usize,
    ) -> Result<ApplyOutcome> {
        Ok(self.state.apply_controlled_gate(
            &self.catalog,
            gate_id,
            &[control],
            &[target],
            &Params::new(),
        )?)
    }

    /// Current amplitudes in labeled form
    pub fn state_vector(&self) -> LabeledAmplitudes {
        self.state.to_labeled_format()
    }

    /// Current probabilities above the configured threshold
    pub fn measurement_probabilities(&self) -> BTreeMap<String, f64> {
        self.state.probability_map(self.config.probability_threshold)
    }
}

/// Map a placement onto the operand order its gate matrix expects
fn operands_for(
    kind: &GateKind,
    placement: &GatePlacement,
) -> std::result::Result<Operands, OperandError> {
    let arity = kind.num_qubits();
    if arity == 1 {
        return Ok(smallvec![placement.qubit]);
    }

    let control = placement.control.ok_or(OperandError::Missing("control"))?;
    let target = placement.target.ok_or(OperandError::Missing("target"))?;
    match arity {
        2 => Ok(smallvec![control, target]),
        3 => {
            let control2 = placement.control2.unwrap_or_else(|| {
                debug!(
                    gate = %placement.gate_type,
                    control,
                    "no control2 on placement, using control + 1"
                );
                // Saturates so an out-of-register control is rejected, not overflowed
                control.saturating_add(1)
            });
            Ok(smallvec![control, control2, target])
        }
        _ => Err(OperandError::UnsupportedArity(arity)),
    }
}
