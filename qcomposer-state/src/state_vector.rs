//! Dense state vector and arbitrary-operand gate application
//!
//! # Operand layout
//!
//! A gate on `k` qubits is applied to an ordered operand list
//! `[q_0, q_1, ..., q_{k-1}]`. Operand `q_p` supplies bit `k-1-p` of the
//! gate's local basis index, so the first operand is the most significant
//! local bit. This matches the fixed CNOT/CZ/Toffoli/CCZ tables and
//! [`control_mat`](qcomposer_gates::matrices::control_mat): controls come
//! first, targets last, for any register indices.

use crate::error::{Result, StateError};
use crate::labeled::LabeledAmplitudes;
use num_complex::Complex64;
use qcomposer_core::complex::{ONE, ZERO};
use qcomposer_core::Matrix;
use qcomposer_gates::{GateCatalog, GateKind, Params};
use std::collections::BTreeMap;
use tracing::warn;

/// Largest register a [`StateVector`] will allocate
pub const MAX_QUBITS: usize = 24;

/// What [`StateVector::apply_gate`] did with a gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The gate's matrix was applied
    Applied,
    /// Layout-only gate; the state is unchanged
    NoOp,
    /// Unknown gate id; reported and skipped
    Skipped { gate_id: String },
}

/// Quantum state vector over `n` qubits
///
/// Bit `b` of a basis index is the value of qubit `b`.
///
/// # Example
///
/// ```
/// use qcomposer_state::StateVector;
///
/// // Create a 2-qubit state (4 amplitudes)
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.probability(0).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns [`StateError::InvalidDimension`] if `num_qubits` exceeds
    /// [`MAX_QUBITS`]
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidDimension {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// The amplitudes are taken as given; they are not normalized.
    ///
    /// # Errors
    /// Returns error if `amplitudes.len() != 2^num_qubits`
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;
        if amplitudes.len() != state.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension(),
                actual: amplitudes.len(),
            });
        }
        state.amplitudes.copy_from_slice(amplitudes);
        Ok(state)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`
    pub fn amplitude(&self, index: usize) -> Result<Complex64> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(StateError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    /// Overwrite the amplitude of basis state `index`
    pub fn set_amplitude(&mut self, index: usize, value: Complex64) -> Result<()> {
        let dimension = self.dimension();
        let slot = self
            .amplitudes
            .get_mut(index)
            .ok_or(StateError::IndexOutOfRange { index, dimension })?;
        *slot = value;
        Ok(())
    }

    /// Measurement probability `|amplitude|²` of basis state `index`
    pub fn probability(&self, index: usize) -> Result<f64> {
        self.amplitude(index).map(|a| a.norm_sqr())
    }

    /// Probabilities of every basis state, in basis order
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Probabilities strictly above `threshold`, keyed by basis label
    pub fn probability_map(&self, threshold: f64) -> BTreeMap<String, f64> {
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(index, a)| (index, a.norm_sqr()))
            .filter(|&(_, p)| p > threshold)
            .map(|(index, p)| (self.label(index), p))
            .collect()
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check if the state is normalized, i.e. `|norm - 1| < epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Scale all amplitudes so that the norm equals 1
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 1e-10 {
            let inv_norm = 1.0 / norm;
            for amplitude in &mut self.amplitudes {
                *amplitude *= inv_norm;
            }
        }
    }

    /// Zero-padded binary label of basis state `index`, e.g. `"011"`
    ///
    /// A zero-qubit register has the single label `""`.
    pub fn label(&self, index: usize) -> String {
        if self.num_qubits == 0 {
            return String::new();
        }
        format!("{:0width$b}", index, width = self.num_qubits)
    }

    /// Project the amplitudes into the labeled shape used by visualizations
    pub fn to_labeled_format(&self) -> LabeledAmplitudes {
        LabeledAmplitudes {
            amplitudes: self.amplitudes.iter().map(|&a| a.into()).collect(),
            labels: (0..self.dimension()).map(|i| self.label(i)).collect(),
        }
    }

    /// Apply a `2^k × 2^k` matrix to `k` operand qubits
    ///
    /// See the module docs for the operand layout. The whole pass reads the
    /// pre-update amplitudes and swaps in a fresh buffer.
    ///
    /// # Errors
    /// - [`StateError::DimensionMismatch`] if the matrix is not
    ///   `2^targets.len()` square
    /// - [`StateError::InvalidQubitIndex`] for an operand outside the register
    /// - [`StateError::DuplicateQubit`] if an operand repeats
    ///
    /// # Example
    /// ```
    /// use qcomposer_gates::matrices;
    /// use qcomposer_state::StateVector;
    ///
    /// let mut state = StateVector::new(2).unwrap();
    /// state.apply_matrix(&matrices::pauli_x(), &[0]).unwrap();
    /// state.apply_matrix(&matrices::cnot(), &[0, 1]).unwrap();
    /// assert_eq!(state.probability(0b11).unwrap(), 1.0);
    /// ```
    pub fn apply_matrix(&mut self, matrix: &Matrix, targets: &[usize]) -> Result<()> {
        self.check_operands(targets.iter())?;
        self.check_matrix(matrix, targets.len())?;
        self.amplitudes = self.transform(matrix, targets, 0);
        Ok(())
    }

    /// Apply `matrix` to `targets` on the basis states where every control
    /// qubit is 1, leaving all other amplitudes untouched
    ///
    /// Equivalent to `apply_matrix(control_mat(controls.len(), matrix),
    /// controls ++ targets)`.
    ///
    /// # Errors
    /// As [`apply_matrix`](Self::apply_matrix); a qubit used both as a
    /// control and a target is a [`StateError::DuplicateQubit`]
    pub fn apply_controlled_matrix(
        &mut self,
        matrix: &Matrix,
        controls: &[usize],
        targets: &[usize],
    ) -> Result<()> {
        self.check_operands(controls.iter().chain(targets))?;
        self.check_matrix(matrix, targets.len())?;
        let control_mask = controls.iter().fold(0usize, |mask, &q| mask | (1 << q));
        self.amplitudes = self.transform(matrix, targets, control_mask);
        Ok(())
    }

    /// Look up `gate_id` in `catalog` and apply it to `targets`
    ///
    /// Unknown ids are logged and skipped so one bad gate does not abort a
    /// circuit. Structural problems (wrong operand count, bad indices) are
    /// still errors.
    pub fn apply_gate(
        &mut self,
        catalog: &GateCatalog,
        gate_id: &str,
        targets: &[usize],
        params: &Params,
    ) -> Result<ApplyOutcome> {
        let kind = catalog.resolve(gate_id, params);
        self.apply_kind(&kind, targets)
    }

    /// Apply an already resolved gate to `targets`
    pub fn apply_kind(&mut self, kind: &GateKind, targets: &[usize]) -> Result<ApplyOutcome> {
        if let GateKind::Unrecognized(gate_id) = kind {
            warn!(gate = %gate_id, "unknown gate type, skipping");
            return Ok(ApplyOutcome::Skipped {
                gate_id: gate_id.clone(),
            });
        }
        match kind.matrix() {
            Some(matrix) => {
                self.apply_matrix(&matrix, targets)?;
                Ok(ApplyOutcome::Applied)
            }
            None => Ok(ApplyOutcome::NoOp),
        }
    }

    /// Apply catalog gate `gate_id` to `targets`, conditioned on `controls`
    pub fn apply_controlled_gate(
        &mut self,
        catalog: &GateCatalog,
        gate_id: &str,
        controls: &[usize],
        targets: &[usize],
        params: &Params,
    ) -> Result<ApplyOutcome> {
        let kind = catalog.resolve(gate_id, params);
        if let GateKind::Unrecognized(gate_id) = &kind {
            warn!(gate = %gate_id, "unknown gate type, skipping");
            return Ok(ApplyOutcome::Skipped {
                gate_id: gate_id.clone(),
            });
        }
        match kind.matrix() {
            Some(matrix) => {
                self.apply_controlled_matrix(&matrix, controls, targets)?;
                Ok(ApplyOutcome::Applied)
            }
            None => Ok(ApplyOutcome::NoOp),
        }
    }

    fn check_matrix(&self, matrix: &Matrix, operands: usize) -> Result<()> {
        let expected = 1usize << operands;
        if matrix.rows() != expected || matrix.cols() != expected {
            return Err(StateError::DimensionMismatch {
                expected,
                actual: matrix.rows().max(matrix.cols()),
            });
        }
        Ok(())
    }

    fn check_operands<'a>(&self, qubits: impl Iterator<Item = &'a usize>) -> Result<()> {
        let mut seen = 0usize;
        for &qubit in qubits {
            if qubit >= self.num_qubits {
                return Err(StateError::InvalidQubitIndex {
                    index: qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if seen & (1 << qubit) != 0 {
                return Err(StateError::DuplicateQubit(qubit));
            }
            seen |= 1 << qubit;
        }
        Ok(())
    }

    /// New amplitudes after applying `matrix` to `targets` on every basis
    /// state whose bits cover `control_mask`
    fn transform(&self, matrix: &Matrix, targets: &[usize], control_mask: usize) -> Vec<Complex64> {
        let local_dim = 1usize << targets.len();
        let target_mask = targets.iter().fold(0usize, |mask, &q| mask | (1 << q));
        let mut next = vec![ZERO; self.dimension()];

        for (index, &amplitude) in self.amplitudes.iter().enumerate() {
            if index & control_mask != control_mask {
                next[index] += amplitude;
                continue;
            }
            let column = local_index(index, targets);
            let base = index & !target_mask;
            for row in 0..local_dim {
                let entry = matrix[(row, column)];
                if entry == ZERO {
                    continue;
                }
                next[global_index(base, row, targets)] += amplitude * entry;
            }
        }
        next
    }
}

/// Gather the operand bits of `index` into a local basis index
#[inline]
fn local_index(index: usize, targets: &[usize]) -> usize {
    let k = targets.len();
    targets
        .iter()
        .enumerate()
        .fold(0, |local, (p, &q)| local | (((index >> q) & 1) << (k - 1 - p)))
}

/// Scatter the bits of `local` onto the operand positions of `base`
#[inline]
fn global_index(base: usize, local: usize, targets: &[usize]) -> usize {
    let k = targets.len();
    targets
        .iter()
        .enumerate()
        .fold(base, |index, (p, &q)| index | (((local >> (k - 1 - p)) & 1) << q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qcomposer_gates::matrices;
    use std::f64::consts::PI;

    fn catalog() -> GateCatalog {
        GateCatalog::standard()
    }

    #[test]
    fn test_new_state_vector() {
        let state = StateVector::new(2).unwrap();
        assert_eq!(state.num_qubits(), 2);
        assert_eq!(state.dimension(), 4);
        assert!(StateVector::new(MAX_QUBITS + 1).is_err());
    }

    #[test]
    fn test_initial_state() {
        let state = StateVector::new(3).unwrap();
        let amplitudes = state.amplitudes();

        // Should be |000⟩
        assert_eq!(amplitudes[0], ONE);
        for amplitude in &amplitudes[1..] {
            assert_eq!(*amplitude, ZERO);
        }
    }

    #[test]
    fn test_from_amplitudes() {
        let amplitudes = vec![Complex64::new(0.5, 0.0); 4];
        let state = StateVector::from_amplitudes(2, &amplitudes).unwrap();
        assert_eq!(state.amplitudes(), amplitudes.as_slice());

        let result = StateVector::from_amplitudes(2, &[ONE]);
        assert_eq!(
            result,
            Err(StateError::DimensionMismatch {
                expected: 4,
                actual: 1
            })
        );
    }

    #[test]
    fn test_amplitude_bounds() {
        let mut state = StateVector::new(1).unwrap();
        assert!(state.amplitude(1).is_ok());
        assert_eq!(
            state.amplitude(2),
            Err(StateError::IndexOutOfRange {
                index: 2,
                dimension: 2
            })
        );
        assert!(state.set_amplitude(5, ONE).is_err());

        state.set_amplitude(0, ZERO).unwrap();
        state.set_amplitude(1, ONE).unwrap();
        assert_eq!(state.probability(1).unwrap(), 1.0);
    }

    #[test]
    fn test_normalize() {
        let mut state = StateVector::from_amplitudes(2, &[ONE; 4]).unwrap();
        assert!(!state.is_normalized(1e-10));
        state.normalize();

        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(state.amplitudes()[0].norm(), 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_labels() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.label(0), "000");
        assert_eq!(state.label(5), "101");

        let labeled = state.to_labeled_format();
        assert_eq!(
            labeled.labels,
            vec!["000", "001", "010", "011", "100", "101", "110", "111"]
        );
        assert_eq!(labeled.amplitudes[0].r, 1.0);
    }

    #[test]
    fn test_zero_qubit_labels() {
        let state = StateVector::new(0).unwrap();
        assert_eq!(state.dimension(), 1);
        assert_eq!(state.label(0), "");
        assert_eq!(state.to_labeled_format().labels, vec![""]);
        assert_eq!(state.probability_map(1e-6).get(""), Some(&1.0));
    }

    #[test]
    fn test_hadamard() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_matrix(&matrices::hadamard(), &[0]).unwrap();

        let probs = state.probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_single_qubit_gate_on_high_qubit() {
        let mut state = StateVector::new(3).unwrap();
        state.apply_matrix(&matrices::pauli_x(), &[2]).unwrap();
        assert_eq!(state.amplitude(0b100).unwrap(), ONE);
    }

    #[test]
    fn test_cnot_operand_order() {
        // control = 1, target = 0
        let mut state = StateVector::new(2).unwrap();
        state.apply_matrix(&matrices::pauli_x(), &[1]).unwrap();
        state.apply_matrix(&matrices::cnot(), &[1, 0]).unwrap();
        assert_eq!(state.probability(0b11).unwrap(), 1.0);

        // control clear: nothing happens
        let mut state = StateVector::new(2).unwrap();
        state.apply_matrix(&matrices::cnot(), &[0, 1]).unwrap();
        assert_eq!(state.probability(0).unwrap(), 1.0);
    }

    #[test]
    fn test_toffoli_non_adjacent_operands() {
        let mut state = StateVector::new(4).unwrap();
        state.apply_matrix(&matrices::pauli_x(), &[3]).unwrap();
        state.apply_matrix(&matrices::pauli_x(), &[0]).unwrap();
        state.apply_matrix(&matrices::toffoli(), &[3, 0, 2]).unwrap();
        assert_eq!(state.probability(0b1101).unwrap(), 1.0);
    }

    #[test]
    fn test_apply_matrix_errors() {
        let mut state = StateVector::new(2).unwrap();
        assert_eq!(
            state.apply_matrix(&matrices::cnot(), &[0]),
            Err(StateError::DimensionMismatch {
                expected: 2,
                actual: 4
            })
        );
        assert_eq!(
            state.apply_matrix(&matrices::hadamard(), &[2]),
            Err(StateError::InvalidQubitIndex {
                index: 2,
                num_qubits: 2
            })
        );
        assert_eq!(
            state.apply_matrix(&matrices::cnot(), &[1, 1]),
            Err(StateError::DuplicateQubit(1))
        );
        // Failed calls leave the state alone
        assert_eq!(state.amplitude(0).unwrap(), ONE);
    }

    #[test]
    fn test_controlled_matrix_matches_control_mat() {
        let mut start = StateVector::new(3).unwrap();
        start.apply_matrix(&matrices::hadamard(), &[0]).unwrap();
        start.apply_matrix(&matrices::hadamard(), &[1]).unwrap();
        start.apply_matrix(&matrices::rotation_y(0.7), &[2]).unwrap();

        let target = matrices::universal(0.4, 1.1, -0.3);
        for (controls, targets) in [(vec![0], vec![2]), (vec![2], vec![1]), (vec![1, 2], vec![0])] {
            let mut branched = start.clone();
            branched
                .apply_controlled_matrix(&target, &controls, &targets)
                .unwrap();

            let mut expanded = start.clone();
            let full = matrices::control_mat(controls.len(), &target).unwrap();
            let operands: Vec<usize> = controls.iter().chain(&targets).copied().collect();
            expanded.apply_matrix(&full, &operands).unwrap();

            for (a, b) in branched.amplitudes().iter().zip(expanded.amplitudes()) {
                assert_relative_eq!(a.re, b.re, epsilon = 1e-12);
                assert_relative_eq!(a.im, b.im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_controlled_matrix_overlap() {
        let mut state = StateVector::new(2).unwrap();
        assert_eq!(
            state.apply_controlled_matrix(&matrices::pauli_x(), &[0], &[0]),
            Err(StateError::DuplicateQubit(0))
        );
    }

    #[test]
    fn test_apply_gate_outcomes() {
        let catalog = catalog();
        let mut state = StateVector::new(2).unwrap();

        let outcome = state.apply_gate(&catalog, "X", &[0], &Params::new()).unwrap();
        assert_eq!(outcome, ApplyOutcome::Applied);

        let before = state.clone();
        let outcome = state.apply_gate(&catalog, "Barrier", &[0], &Params::new()).unwrap();
        assert_eq!(outcome, ApplyOutcome::NoOp);
        let outcome = state.apply_gate(&catalog, "Bogus", &[0], &Params::new()).unwrap();
        assert_eq!(
            outcome,
            ApplyOutcome::Skipped {
                gate_id: "Bogus".to_string()
            }
        );
        assert_eq!(state, before);

        // Wrong operand count is structural, not forgiven
        assert!(state.apply_gate(&catalog, "CNOT", &[0], &Params::new()).is_err());
    }

    #[test]
    fn test_apply_gate_with_params() {
        let catalog = catalog();
        let mut state = StateVector::new(1).unwrap();
        let params: Params = [("theta".to_string(), PI)].into_iter().collect();
        state.apply_gate(&catalog, "Rx", &[0], &params).unwrap();
        assert_relative_eq!(state.probability(1).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_controlled_gate() {
        let catalog = catalog();
        let mut state = StateVector::new(3).unwrap();
        state.apply_gate(&catalog, "X", &[0], &Params::new()).unwrap();
        state.apply_gate(&catalog, "X", &[2], &Params::new()).unwrap();

        let outcome = state
            .apply_controlled_gate(&catalog, "X", &[0, 2], &[1], &Params::new())
            .unwrap();
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(state.probability(0b111).unwrap(), 1.0);

        let outcome = state
            .apply_controlled_gate(&catalog, "Nope", &[0], &[1], &Params::new())
            .unwrap();
        assert!(matches!(outcome, ApplyOutcome::Skipped { .. }));
    }

    #[test]
    fn test_probability_map_threshold() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_matrix(&matrices::hadamard(), &[1]).unwrap();

        let map = state.probability_map(1e-6);
        assert_eq!(map.len(), 2);
        assert_relative_eq!(map["00"], 0.5, epsilon = 1e-12);
        assert_relative_eq!(map["10"], 0.5, epsilon = 1e-12);
        assert!(!map.contains_key("01"));
    }

    #[test]
    fn test_index_helpers() {
        let targets = [3, 0];
        // qubit 3 -> local bit 1, qubit 0 -> local bit 0
        assert_eq!(local_index(0b1000, &targets), 0b10);
        assert_eq!(local_index(0b0001, &targets), 0b01);
        assert_eq!(global_index(0b0110, 0b11, &targets), 0b1111);
    }
}
