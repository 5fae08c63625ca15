//! Dense complex matrices in row-major order
//!
//! Gate matrices are square with a power-of-two dimension: a `k`-qubit gate
//! is a `2^k × 2^k` matrix. Rectangular matrices are still accepted so that
//! [`Matrix::multiply`] can report shape errors instead of panicking.

use crate::complex::{ComplexExt, ONE, ZERO};
use crate::error::MatrixError;
use crate::Result;
use num_complex::Complex64;
use std::fmt;
use std::ops::Index;

/// Dense complex matrix backed by a flat row-major vector
///
/// # Example
///
/// ```
/// use qcomposer_core::{Complex64, Matrix};
///
/// let mut m = Matrix::identity(2);
/// m.set(0, 1, Complex64::new(0.0, 1.0)).unwrap();
/// assert_eq!(m.get(0, 1).unwrap(), Complex64::new(0.0, 1.0));
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// Create a `rows × cols` matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![ZERO; rows * cols],
        }
    }

    /// Create a `size × size` identity matrix
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = ONE;
        }
        m
    }

    /// Wrap row-major data
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] if `data.len() != rows * cols`
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Complex64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidDimension {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a square matrix from a fixed-size row array
    pub fn from_rows<const N: usize>(rows: [[Complex64; N]; N]) -> Self {
        Self {
            rows: N,
            cols: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of qubits the matrix acts on
    ///
    /// Returns `None` unless the matrix is square with a power-of-two
    /// dimension of at least 2.
    pub fn num_qubits(&self) -> Option<usize> {
        if self.is_square() && self.rows >= 2 && self.rows.is_power_of_two() {
            Some(self.rows.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Row-major view of the elements
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Bounds-checked element read
    pub fn get(&self, row: usize, col: usize) -> Result<Complex64> {
        self.check_bounds(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Bounds-checked element write
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) -> Result<()> {
        self.check_bounds(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::index_out_of_range(
                row, col, self.rows, self.cols,
            ));
        }
        Ok(())
    }

    /// Matrix product `self · other`
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols != other.rows`
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a == ZERO {
                    continue;
                }
                for j in 0..other.cols {
                    result.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(result)
    }

    /// Kronecker product `self ⊗ other`
    pub fn tensor(&self, other: &Matrix) -> Matrix {
        tensor_product(self, other)
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Matrix {
        let mut result = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j].conj();
            }
        }
        result
    }

    /// Multiply every element by `factor`
    pub fn scale(&self, factor: Complex64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&z| z * factor).collect(),
        }
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.approx_eq(b, epsilon))
    }

    /// Check U†U = I within `epsilon`
    pub fn is_unitary(&self, epsilon: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        match self.adjoint().multiply(self) {
            Ok(product) => product.approx_eq(&Matrix::identity(self.rows), epsilon),
            Err(_) => false,
        }
    }
}

/// Kronecker product of `a` and `b`
///
/// The result has shape `(a.rows·b.rows) × (a.cols·b.cols)` with
/// `result[i·b.rows + k][j·b.cols + l] = a[i][j] · b[k][l]`.
pub fn tensor_product(a: &Matrix, b: &Matrix) -> Matrix {
    let rows = a.rows * b.rows;
    let cols = a.cols * b.cols;
    let mut result = Matrix::zeros(rows, cols);

    for i in 0..a.rows {
        for j in 0..a.cols {
            let a_ij = a.data[i * a.cols + j];
            for k in 0..b.rows {
                for l in 0..b.cols {
                    let row = i * b.rows + k;
                    let col = j * b.cols + l;
                    result.data[row * cols + col] = a_ij * b.data[k * b.cols + l];
                }
            }
        }
    }
    result
}

/// Unchecked-by-`Result` element access; panics when out of range
impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of range for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} [", self.rows, self.cols)?;
        for row in self.data.chunks(self.cols.max(1)) {
            write!(f, "  ")?;
            for z in row {
                write!(f, "{:+.4}{:+.4}i ", z.re, z.im)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{I, NEG_I, NEG_ONE};
    use approx::assert_relative_eq;

    fn pauli_x() -> Matrix {
        Matrix::from_rows([[ZERO, ONE], [ONE, ZERO]])
    }

    fn pauli_y() -> Matrix {
        Matrix::from_rows([[ZERO, NEG_I], [I, ZERO]])
    }

    #[test]
    fn test_identity() {
        let id = Matrix::identity(4);
        for r in 0..4 {
            for c in 0..4 {
                let expected = if r == c { ONE } else { ZERO };
                assert_eq!(id.get(r, c).unwrap(), expected);
            }
        }
        assert_eq!(id.num_qubits(), Some(2));
    }

    #[test]
    fn test_get_set_out_of_range() {
        let mut m = Matrix::zeros(2, 2);
        assert_eq!(
            m.get(2, 0),
            Err(MatrixError::IndexOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert!(m.set(0, 5, ONE).is_err());
        m.set(1, 1, I).unwrap();
        assert_eq!(m[(1, 1)], I);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let m = Matrix::identity(2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(2, 2, vec![ONE; 3]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidDimension {
                rows: 2,
                cols: 2,
                len: 3
            }
        );
    }

    #[test]
    fn test_multiply() {
        // XY = iZ
        let xy = pauli_x().multiply(&pauli_y()).unwrap();
        let i_z = Matrix::from_rows([[I, ZERO], [ZERO, NEG_I]]);
        assert!(xy.approx_eq(&i_z, 1e-12));

        let xx = pauli_x().multiply(&pauli_x()).unwrap();
        assert_eq!(xx, Matrix::identity(2));
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = Matrix::zeros(2, 4);
        let b = Matrix::identity(2);
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::DimensionMismatch {
                left: (2, 4),
                right: (2, 2)
            })
        );
        // Rectangular products with matching inner dimension are fine
        let c = b.multiply(&a).unwrap();
        assert_eq!((c.rows(), c.cols()), (2, 4));
    }

    #[test]
    fn test_tensor_product() {
        // X ⊗ I maps |00⟩ (index 0) to |10⟩ (index 2)
        let x_i = tensor_product(&pauli_x(), &Matrix::identity(2));
        assert_eq!((x_i.rows(), x_i.cols()), (4, 4));
        assert_eq!(x_i[(2, 0)], ONE);
        assert_eq!(x_i[(3, 1)], ONE);
        assert_eq!(x_i[(0, 2)], ONE);
        assert_eq!(x_i[(0, 0)], ZERO);

        let i_x = Matrix::identity(2).tensor(&pauli_x());
        assert_eq!(i_x[(1, 0)], ONE);
        assert_eq!(i_x[(2, 3)], ONE);
    }

    #[test]
    fn test_tensor_rectangular_shape() {
        let a = Matrix::zeros(1, 2);
        let b = Matrix::zeros(3, 1);
        let t = tensor_product(&a, &b);
        assert_eq!((t.rows(), t.cols()), (3, 2));
    }

    #[test]
    fn test_adjoint_and_unitary() {
        let y = pauli_y();
        assert!(y.adjoint().approx_eq(&y, 1e-12));
        assert!(y.is_unitary(1e-12));

        let not_unitary = Matrix::from_rows([[ONE, ONE], [ZERO, ONE]]);
        assert!(!not_unitary.is_unitary(1e-12));
        assert!(!Matrix::zeros(2, 4).is_unitary(1e-12));
    }

    #[test]
    fn test_scale() {
        let m = Matrix::identity(2).scale(NEG_ONE);
        assert_relative_eq!(m[(0, 0)].re, -1.0);
        assert_relative_eq!(m[(1, 1)].re, -1.0);
    }

    #[test]
    fn test_num_qubits_rejects_non_power_of_two() {
        assert_eq!(Matrix::identity(3).num_qubits(), None);
        assert_eq!(Matrix::identity(1).num_qubits(), None);
        assert_eq!(Matrix::zeros(2, 4).num_qubits(), None);
        assert_eq!(Matrix::identity(8).num_qubits(), Some(3));
    }
}
