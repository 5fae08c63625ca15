//! Property-based and scenario tests for the state vector
//!
//! Covers the physical invariants every gate sequence must keep.

use approx::assert_relative_eq;
use proptest::prelude::*;
use qcomposer_gates::{matrices, GateCatalog, Params, StandardGate};
use qcomposer_state::{ApplyOutcome, StateVector};
use std::f64::consts::PI;

const UNITARY_GATES: [StandardGate; 22] = [
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
    StandardGate::Cry,
    StandardGate::Ccnot,
    StandardGate::Ccz,
];

/// Pick `count` distinct qubits out of `num_qubits` from raw seeds
fn distinct_qubits(num_qubits: usize, seeds: &[usize], count: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..num_qubits).collect();
    seeds
        .iter()
        .take(count)
        .map(|seed| pool.remove(seed % pool.len()))
        .collect()
}

fn params(theta: f64, phi: f64, lambda: f64) -> Params {
    [
        ("theta".to_string(), theta),
        ("phi".to_string(), phi),
        ("lambda".to_string(), lambda),
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// Norm preservation
// ============================================================================

proptest! {
    /// Property: any sequence of catalog gates keeps Σ|a|² = 1
    #[test]
    fn gate_sequences_preserve_norm(
        num_qubits in 1usize..=5,
        ops in prop::collection::vec(
            (0usize..UNITARY_GATES.len(), prop::array::uniform3(0usize..8), -PI..PI, -PI..PI),
            0..40
        )
    ) {
        let catalog = GateCatalog::standard();
        let mut state = StateVector::new(num_qubits).unwrap();

        for (gate_index, seeds, theta, phi) in ops {
            let gate = UNITARY_GATES[gate_index];
            let arity = catalog.resolve(gate.id(), &Params::new()).num_qubits();
            if arity > num_qubits {
                continue;
            }
            let qubits = distinct_qubits(num_qubits, &seeds, arity);
            let outcome = state
                .apply_gate(&catalog, gate.id(), &qubits, &params(theta, phi, -theta))
                .unwrap();
            prop_assert_eq!(outcome, ApplyOutcome::Applied);
        }

        prop_assert!((state.norm() - 1.0).abs() < 1e-9);
        let total: f64 = state.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    /// Property: the direct control branch and the expanded matrix agree
    #[test]
    fn controlled_paths_agree(
        seeds in prop::array::uniform4(0usize..8),
        theta in -PI..PI,
        phi in -PI..PI,
    ) {
        let mut start = StateVector::new(4).unwrap();
        for qubit in 0..4 {
            start.apply_matrix(&matrices::rotation_y(theta + qubit as f64), &[qubit]).unwrap();
        }

        let qubits = distinct_qubits(4, &seeds, 3);
        let target = matrices::universal(theta, phi, 0.5);

        let mut branched = start.clone();
        branched.apply_controlled_matrix(&target, &qubits[..2], &qubits[2..]).unwrap();

        let mut expanded = start.clone();
        expanded
            .apply_matrix(&matrices::control_mat(2, &target).unwrap(), &qubits)
            .unwrap();

        for (a, b) in branched.amplitudes().iter().zip(expanded.amplitudes()) {
            prop_assert!((a - b).norm() < 1e-12);
        }
    }
}

// ============================================================================
// Named scenarios
// ============================================================================

#[test]
fn test_pauli_x_flips_ground_state() {
    let catalog = GateCatalog::standard();
    let mut state = StateVector::new(1).unwrap();
    state.apply_gate(&catalog, "X", &[0], &Params::new()).unwrap();

    assert_eq!(state.amplitude(0).unwrap().norm(), 0.0);
    assert_eq!(state.amplitude(1).unwrap().norm(), 1.0);
}

#[test]
fn test_double_x_restores_state() {
    let catalog = GateCatalog::standard();
    let mut state = StateVector::new(3).unwrap();
    state.apply_gate(&catalog, "H", &[0], &Params::new()).unwrap();
    state.apply_gate(&catalog, "Ry", &[2], &params(0.3, 0.0, 0.0)).unwrap();
    let before = state.clone();

    state.apply_gate(&catalog, "X", &[1], &Params::new()).unwrap();
    state.apply_gate(&catalog, "X", &[1], &Params::new()).unwrap();

    for (a, b) in state.amplitudes().iter().zip(before.amplitudes()) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn test_full_turn_rz_keeps_probabilities() {
    let catalog = GateCatalog::standard();
    let mut state = StateVector::new(2).unwrap();
    state.apply_gate(&catalog, "H", &[0], &Params::new()).unwrap();
    state.apply_gate(&catalog, "U", &[1], &params(1.2, 0.4, 0.9)).unwrap();
    let before = state.probabilities();

    state
        .apply_gate(&catalog, "Rz", &[0], &params(2.0 * PI, 0.0, 0.0))
        .unwrap();

    for (after, before) in state.probabilities().iter().zip(&before) {
        assert_relative_eq!(*after, *before, epsilon = 1e-9);
    }
}

#[test]
fn test_bell_state_labels() {
    let catalog = GateCatalog::standard();
    let mut state = StateVector::new(2).unwrap();
    state.apply_gate(&catalog, "H", &[0], &Params::new()).unwrap();
    state.apply_gate(&catalog, "CNOT", &[0, 1], &Params::new()).unwrap();

    let labeled = state.to_labeled_format();
    let half = std::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(labeled.get("00").unwrap().r, half, epsilon = 1e-12);
    assert_relative_eq!(labeled.get("11").unwrap().r, half, epsilon = 1e-12);
    assert_eq!(labeled.get("01").unwrap().probability(), 0.0);
}
