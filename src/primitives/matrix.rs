//! Matrix type for 2D numeric data (column-major storage).

use serde::{Deserialize, Serialize};

use super::Vector;
use crate::error::EliminarError;
use crate::Result;

/// A dense matrix of `f64` values, stored column-major.
///
/// A matrix is an ordered sequence of equal-length columns; element `(r, c)`
/// lives at `data[c * rows + r]`. Column access is a contiguous copy, row
/// access is a strided scan across columns.
///
/// # Examples
///
/// ```
/// use eliminar::primitives::Matrix;
///
/// // Two columns of height two: rows read [1 3; 2 4].
/// let m = Matrix::from_columns(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(0, 1), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from an ordered sequence of columns.
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is empty or if any column's length
    /// differs from the first column's.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Err(EliminarError::EmptyInput { what: "columns" });
        };

        let rows = first.len();
        let cols = columns.len();
        let mut data = Vec::with_capacity(rows * cols);
        for column in &columns {
            if column.len() != rows {
                return Err(EliminarError::dimension_mismatch(
                    "column length",
                    rows,
                    column.len(),
                ));
            }
            data.extend_from_slice(column);
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix of size `n`.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[col * self.rows + row]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[col * self.rows + row] = value;
    }

    /// Returns a row as a Vector (strided scan across columns).
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector {
        let data: Vec<f64> = (0..self.cols)
            .map(|col| self.data[col * self.rows + row_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns a column as a Vector (contiguous copy).
    ///
    /// # Panics
    ///
    /// Panics if `col_idx` is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector {
        let start = col_idx * self.rows;
        Vector::from_slice(&self.data[start..start + self.rows])
    }

    /// Returns the underlying column-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns a zero matrix of the same shape.
    #[must_use]
    pub fn zeros_like(&self) -> Self {
        Self::zeros(self.rows, self.cols)
    }

    /// Returns an identity matrix of the same size.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn identity_like(&self) -> Result<Self> {
        self.require_square()?;
        Ok(Self::eye(self.rows))
    }

    /// Returns a diagonal matrix of the same size with `diag` on the
    /// diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or if `diag`'s length
    /// does not equal the matrix size.
    pub fn diagonal_like(&self, diag: &Vector) -> Result<Self> {
        self.require_square()?;
        if diag.len() != self.rows {
            return Err(EliminarError::dimension_mismatch(
                "diagonal length",
                self.rows,
                diag.len(),
            ));
        }

        let mut result = self.zeros_like();
        for i in 0..self.rows {
            result.set(i, i, diag[i]);
        }
        Ok(result)
    }

    /// Projects onto the upper triangle: entries below the diagonal become
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn upper_triangular(&self) -> Result<Self> {
        self.project(|r, c, x| if r > c { 0.0 } else { x })
    }

    /// Projects onto the strictly upper triangle: the diagonal and everything
    /// below it become zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn strictly_upper_triangular(&self) -> Result<Self> {
        self.project(|r, c, x| if r >= c { 0.0 } else { x })
    }

    /// Projects onto the upper triangle with a unit diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn unit_upper_triangular(&self) -> Result<Self> {
        self.project(|r, c, x| {
            if r > c {
                0.0
            } else if r == c {
                1.0
            } else {
                x
            }
        })
    }

    /// Projects onto the lower triangle: entries above the diagonal become
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn lower_triangular(&self) -> Result<Self> {
        self.project(|r, c, x| if r < c { 0.0 } else { x })
    }

    /// Projects onto the strictly lower triangle: the diagonal and everything
    /// above it become zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn strictly_lower_triangular(&self) -> Result<Self> {
        self.project(|r, c, x| if r <= c { 0.0 } else { x })
    }

    /// Projects onto the lower triangle with a unit diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn unit_lower_triangular(&self) -> Result<Self> {
        self.project(|r, c, x| {
            if r < c {
                0.0
            } else if r == c {
                1.0
            } else {
                x
            }
        })
    }

    /// Transposes the matrix. Always succeeds for any rectangular input.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for c in 0..self.cols {
            for r in 0..self.rows {
                data[r * self.cols + c] = self.data[c * self.rows + r];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Fills the upper triangle by mirroring the lower triangle (diagonal
    /// included) across the diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn symmetrize_from_lower(&self) -> Result<Self> {
        self.project(|r, c, x| if r >= c { x } else { self.get(c, r) })
    }

    /// Fills the lower triangle by mirroring the upper triangle (diagonal
    /// included) across the diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn symmetrize_from_upper(&self) -> Result<Self> {
        self.project(|r, c, x| if r <= c { x } else { self.get(c, r) })
    }

    /// Returns a new matrix with rows `a` and `b` exchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either row index is out of bounds.
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Self> {
        if a >= self.rows || b >= self.rows {
            return Err(EliminarError::dimension_mismatch(
                "row index below",
                self.rows,
                a.max(b),
            ));
        }

        let mut result = self.clone();
        for col in 0..self.cols {
            result.data.swap(col * self.rows + a, col * self.rows + b);
        }
        Ok(result)
    }

    /// Multiplies every entry by a scalar, column by column.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for c in 0..self.cols {
            data.extend_from_slice(self.column(c).scale(factor).as_slice());
        }
        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Element-wise sum of one or more same-shape matrices, computed column
    /// by column via [`Vector::add`].
    ///
    /// A single-term slice returns a copy of that term.
    ///
    /// # Errors
    ///
    /// Returns an error if `terms` is empty or if any term's shape differs
    /// from the first term's.
    pub fn add(terms: &[Matrix]) -> Result<Matrix> {
        Self::fold_terms(terms, Vector::add)
    }

    /// Element-wise left-to-right difference of one or more same-shape
    /// matrices, computed column by column via [`Vector::subtract`].
    ///
    /// A single-term slice returns a copy of that term.
    ///
    /// # Errors
    ///
    /// Returns an error if `terms` is empty or if any term's shape differs
    /// from the first term's.
    pub fn subtract(terms: &[Matrix]) -> Result<Matrix> {
        Self::fold_terms(terms, Vector::subtract)
    }

    fn fold_terms(
        terms: &[Matrix],
        column_fold: impl Fn(&[Vector]) -> Result<Vector>,
    ) -> Result<Matrix> {
        let Some(first) = terms.first() else {
            return Err(EliminarError::EmptyInput { what: "terms" });
        };
        if terms.len() == 1 {
            return Ok(first.clone());
        }

        for term in terms {
            if term.cols != first.cols {
                return Err(EliminarError::dimension_mismatch(
                    "column count",
                    first.cols,
                    term.cols,
                ));
            }
        }

        let mut columns = Vec::with_capacity(first.cols);
        for i in 0..first.cols {
            let column_terms: Vec<Vector> = terms.iter().map(|t| t.column(i)).collect();
            columns.push(column_fold(&column_terms)?.to_vec());
        }
        Matrix::from_columns(columns)
    }

    /// Matrix-matrix multiplication `self * other`.
    ///
    /// Each row of `self` is multiplied against `other` as a row vector; the
    /// resulting rows are assembled as columns and transposed back into
    /// column-major form.
    ///
    /// # Errors
    ///
    /// Returns an error unless `self.n_cols() == other.n_rows()`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(EliminarError::dimension_mismatch(
                "inner dimension",
                self.cols,
                other.rows,
            ));
        }

        let mut result_rows = Vec::with_capacity(self.rows);
        for i in 0..self.rows {
            result_rows.push(self.row(i).vecmat(other)?.to_vec());
        }
        Ok(Matrix::from_columns(result_rows)?.transpose())
    }

    fn require_square(&self) -> Result<()> {
        if self.rows != self.cols {
            return Err(EliminarError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn project(&self, entry: impl Fn(usize, usize, f64) -> f64) -> Result<Self> {
        self.require_square()?;

        let mut result = self.zeros_like();
        for c in 0..self.cols {
            for r in 0..self.rows {
                result.set(r, c, entry(r, c, self.get(r, c)));
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
