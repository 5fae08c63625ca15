//! Executor configuration

use crate::error::{Result, SimulatorError};
use qcomposer_state::MAX_QUBITS;

/// Configuration for the circuit executor
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorConfig {
    /// Probabilities at or below this value are left out of the result map
    ///
    /// Default: 1e-6
    pub probability_threshold: f64,

    /// Largest register the executor accepts
    ///
    /// Default: 16
    pub max_qubits: usize,

    /// Enable execution statistics collection
    ///
    /// Default: false
    pub collect_statistics: bool,

    /// Allowed drift of the final norm from 1
    ///
    /// When set, a larger drift is reported as a warning on the result.
    ///
    /// Default: None
    pub norm_tolerance: Option<f64>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            probability_threshold: 1e-6,
            max_qubits: 16,
            collect_statistics: false,
            norm_tolerance: None,
        }
    }
}

impl ExecutorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for debugging: statistics on, norm checked to 1e-9
    pub fn debug() -> Self {
        Self {
            collect_statistics: true,
            norm_tolerance: Some(1e-9),
            ..Default::default()
        }
    }

    pub fn with_probability_threshold(mut self, threshold: f64) -> Self {
        self.probability_threshold = threshold;
        self
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = Some(tolerance);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.probability_threshold) {
            return Err(SimulatorError::InvalidConfig(format!(
                "probability_threshold must be in [0,1), got {}",
                self.probability_threshold
            )));
        }

        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(SimulatorError::InvalidConfig(format!(
                "max_qubits must be 1-{}, got {}",
                MAX_QUBITS, self.max_qubits
            )));
        }

        if let Some(tolerance) = self.norm_tolerance {
            if tolerance.is_nan() || tolerance <= 0.0 {
                return Err(SimulatorError::InvalidConfig(format!(
                    "norm_tolerance must be positive, got {}",
                    tolerance
                )));
            }
        }

        Ok(())
    }
}
