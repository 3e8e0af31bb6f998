//! Linear systems and elimination transforms.
//!
//! A [`LinearSystem`] pairs a square coefficient matrix with one or more
//! right-hand-side columns and a pivot record. [`LinearSystem::gauss_jordan`]
//! reduces the coefficient matrix to the identity with partial pivoting,
//! leaving the solution in the right-hand side; [`LinearSystem::gaussian`] is
//! the weaker no-pivot companion that only produces an upper-triangular
//! equivalent system.

use serde::{Deserialize, Serialize};

use crate::error::EliminarError;
use crate::primitives::{Matrix, Vector};
use crate::Result;

/// A square linear system `lhs * x = rhs` with a pivot record.
///
/// The right-hand side is a matrix whose columns are simultaneous right-hand
/// sides; a single vector rhs is carried as an `n x 1` matrix. The pivot
/// vector records, per elimination step `i`, the row offset `j - i` of any
/// row swap performed at that step (`0` if none).
///
/// A system is immutable once constructed: each elimination step produces a
/// fresh system from the previous step's matrices and pivot record.
///
/// # Examples
///
/// ```
/// use eliminar::prelude::*;
///
/// let lhs = Matrix::eye(2);
/// let rhs = Vector::from_slice(&[5.0, 7.0]);
/// let solved = LinearSystem::from_vector(lhs, &rhs)
///     .unwrap()
///     .gauss_jordan()
///     .unwrap();
/// assert_eq!(solved.rhs().column(0).as_slice(), &[5.0, 7.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem {
    lhs: Matrix,
    rhs: Matrix,
    pivot: Vector,
    size: usize,
}

impl LinearSystem {
    /// Creates a system with a zero pivot record.
    ///
    /// # Errors
    ///
    /// Returns an error if `lhs` is not square or if `rhs`'s row count does
    /// not equal the system size.
    pub fn new(lhs: Matrix, rhs: Matrix) -> Result<Self> {
        let size = Self::validate_sides(&lhs, &rhs)?;
        let pivot = Vector::zeros(size)?;
        Ok(Self {
            lhs,
            rhs,
            pivot,
            size,
        })
    }

    /// Creates a system carrying an existing pivot record.
    ///
    /// # Errors
    ///
    /// Returns an error if `lhs` is not square, if `rhs`'s row count does not
    /// equal the system size, or if `pivot`'s length does not equal the
    /// system size.
    pub fn with_pivot(lhs: Matrix, rhs: Matrix, pivot: Vector) -> Result<Self> {
        let size = Self::validate_sides(&lhs, &rhs)?;
        if pivot.len() != size {
            return Err(EliminarError::dimension_mismatch(
                "pivot length",
                size,
                pivot.len(),
            ));
        }
        Ok(Self {
            lhs,
            rhs,
            pivot,
            size,
        })
    }

    /// Creates a system whose right-hand side is a single vector, carried as
    /// an `n x 1` matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `lhs` is not square or if `rhs`'s length does not
    /// equal the system size.
    pub fn from_vector(lhs: Matrix, rhs: &Vector) -> Result<Self> {
        let rhs = Matrix::from_columns(vec![rhs.to_vec()])?;
        Self::new(lhs, rhs)
    }

    fn validate_sides(lhs: &Matrix, rhs: &Matrix) -> Result<usize> {
        if !lhs.is_square() {
            return Err(EliminarError::NotSquare {
                rows: lhs.n_rows(),
                cols: lhs.n_cols(),
            });
        }
        if rhs.n_rows() != lhs.n_rows() {
            return Err(EliminarError::dimension_mismatch(
                "rhs rows",
                lhs.n_rows(),
                rhs.n_rows(),
            ));
        }
        Ok(lhs.n_rows())
    }

    /// The square coefficient matrix.
    #[must_use]
    pub fn lhs(&self) -> &Matrix {
        &self.lhs
    }

    /// The right-hand-side columns.
    #[must_use]
    pub fn rhs(&self) -> &Matrix {
        &self.rhs
    }

    /// The per-step row-swap record.
    #[must_use]
    pub fn pivot(&self) -> &Vector {
        &self.pivot
    }

    /// The system size `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gauss-Jordan elimination with partial pivoting.
    ///
    /// Reduces the coefficient matrix to the identity while applying the same
    /// sequence of row operations to the right-hand side, so the returned
    /// system holds `(I, lhs^-1 * rhs)` along with the accumulated pivot
    /// record. Each step builds a dense elementary transform matrix and
    /// applies it to both sides by matrix multiplication.
    ///
    /// The pivot test is an exact comparison against zero: a step pivots only
    /// when the diagonal entry is exactly `0.0`, scanning down the column for
    /// the first nonzero candidate and swapping rows.
    ///
    /// # Errors
    ///
    /// Returns [`EliminarError::Singular`] when some pivot column is zero at
    /// and below the diagonal; any non-conformable intermediate propagates as
    /// its own error. There is no partial output.
    pub fn gauss_jordan(&self) -> Result<LinearSystem> {
        let mut lhs = self.lhs.clone();
        let mut rhs = self.rhs.clone();
        let mut pivot = vec![0.0; self.size];

        for i in 0..self.size {
            let mut transform = lhs.identity_like()?;
            let mut divisor = lhs.get(i, i);

            if divisor == 0.0 {
                match pivot_rows(&lhs, &rhs, i)? {
                    Some((swapped_lhs, swapped_rhs, offset)) => {
                        lhs = swapped_lhs;
                        rhs = swapped_rhs;
                        pivot[i] = offset;
                        divisor = lhs.get(i, i);
                    }
                    None => return Err(EliminarError::Singular { pivot_index: i }),
                }
            } else {
                pivot[i] = 0.0;
            }

            // Column i of the transform scales row i by 1/d and zeroes the
            // column-i entry of every other row.
            for j in 0..self.size {
                if j == i {
                    transform.set(j, i, 1.0 / divisor);
                } else {
                    transform.set(j, i, -lhs.get(j, i) / divisor);
                }
            }

            lhs = transform.matmul(&lhs)?;
            rhs = permute_rhs(&rhs, &transform.transpose())?;
        }

        LinearSystem::with_pivot(lhs, rhs, Vector::from_vec(pivot))
    }

    /// Plain Gaussian elimination: no pivoting, no identity reduction.
    ///
    /// Produces an upper-triangular equivalent system by zeroing, at each
    /// step, only the entries below the diagonal. A zero pivot is tolerated
    /// by emitting zero multipliers for that column, leaving those entries
    /// unreduced rather than swapping rows or failing; the returned pivot
    /// record is therefore always all zeros.
    ///
    /// # Errors
    ///
    /// Returns an error only if an intermediate multiplication is
    /// non-conformable.
    pub fn gaussian(&self) -> Result<LinearSystem> {
        let mut lhs = self.lhs.clone();
        let mut rhs = self.rhs.clone();

        for i in 0..self.size {
            let mut transform = lhs.identity_like()?;
            let divisor = lhs.get(i, i);

            for j in (i + 1)..self.size {
                let multiplier = if divisor == 0.0 {
                    0.0
                } else {
                    -lhs.get(j, i) / divisor
                };
                transform.set(j, i, multiplier);
            }

            lhs = transform.matmul(&lhs)?;
            rhs = permute_rhs(&rhs, &transform.transpose())?;
        }

        LinearSystem::with_pivot(lhs, rhs, Vector::zeros(self.size)?)
    }
}

/// Scans column `i` below row `i` for the first nonzero entry and, when one
/// is found at row `j`, applies the permutation swapping rows `i` and `j` to
/// both sides, returning the swapped sides and the recorded offset `j - i`.
///
/// Returns `Ok(None)` when no nonzero candidate exists, signaling that
/// elimination cannot proceed at this step.
fn pivot_rows(lhs: &Matrix, rhs: &Matrix, i: usize) -> Result<Option<(Matrix, Matrix, f64)>> {
    for j in (i + 1)..lhs.n_rows() {
        if lhs.get(j, i) != 0.0 {
            let permutation = lhs.identity_like()?.swap_rows(i, j)?;
            let new_lhs = permutation.matmul(lhs)?;
            let new_rhs = permute_rhs(rhs, &permutation)?;
            return Ok(Some((new_lhs, new_rhs, (j - i) as f64)));
        }
    }
    Ok(None)
}

/// Applies a row operation encoded in `transform` to every column of `rhs`:
/// each column, read as a row vector, is multiplied against `transform`.
///
/// For an elimination transform `T` the caller passes `T` transposed, so the
/// right-hand side undergoes the same row combination just applied to the
/// left-hand side; for a (symmetric) permutation matrix it is passed as is.
fn permute_rhs(rhs: &Matrix, transform: &Matrix) -> Result<Matrix> {
    if rhs.n_rows() != transform.n_cols() {
        return Err(EliminarError::dimension_mismatch(
            "rhs rows",
            transform.n_cols(),
            rhs.n_rows(),
        ));
    }

    let mut columns = Vec::with_capacity(rhs.n_cols());
    for k in 0..rhs.n_cols() {
        columns.push(rhs.column(k).vecmat(transform)?.to_vec());
    }
    Matrix::from_columns(columns)
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_system_contract.rs"]
mod tests_system_contract;
