//! Complex scalar helpers
//!
//! Amplitudes and matrix elements are plain [`Complex64`] values. Arithmetic
//! (`+`, `-`, `*`), `scale`, `conj`, `norm`, `arg` and `from_polar` come from
//! `num-complex`; this module adds tolerance-based comparison and the
//! constants used by the gate tables.

pub use num_complex::Complex64;

/// Complex number type used throughout the simulator
pub type Complex = Complex64;

/// Default tolerance for [`ComplexExt::approx_eq_default`]
pub const EPSILON: f64 = 1e-10;

pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
pub const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
pub const I: Complex64 = Complex64::new(0.0, 1.0);
pub const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

/// Extra operations on [`Complex64`]
pub trait ComplexExt {
    /// Component-wise comparison within `epsilon`
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;

    /// Comparison with the default tolerance ([`EPSILON`])
    fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }

    /// Magnitude |z|
    fn abs(&self) -> f64;

    /// Angle in radians, `atan2(im, re)`
    fn phase(&self) -> f64;
}

impl ComplexExt for Complex64 {
    #[inline]
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.re - other.re).abs() < epsilon && (self.im - other.im).abs() < epsilon
    }

    #[inline]
    fn abs(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn phase(&self) -> f64 {
        self.im.atan2(self.re)
    }
}
