//! Labeled amplitude projection handed to the visualization layer

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// One amplitude as a `{ "r": re, "i": im }` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amplitude {
    pub r: f64,
    pub i: f64,
}

impl Amplitude {
    pub fn probability(&self) -> f64 {
        self.r * self.r + self.i * self.i
    }
}

impl From<Complex64> for Amplitude {
    fn from(value: Complex64) -> Self {
        Self {
            r: value.re,
            i: value.im,
        }
    }
}

impl From<Amplitude> for Complex64 {
    fn from(value: Amplitude) -> Self {
        Complex64::new(value.r, value.i)
    }
}

/// Amplitudes in basis order with their zero-padded binary labels
///
/// `amplitudes[i]` belongs to basis state `labels[i]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabeledAmplitudes {
    pub amplitudes: Vec<Amplitude>,
    pub labels: Vec<String>,
}

impl LabeledAmplitudes {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Amplitude for a basis label such as `"101"`
    pub fn get(&self, label: &str) -> Option<Amplitude> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|index| self.amplitudes[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Amplitude)> {
        self.labels.iter().map(String::as_str).zip(self.amplitudes.iter())
    }
}
