//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};

use super::Matrix;
use crate::error::EliminarError;
use crate::Result;

/// A dense vector of `f64` components.
///
/// The length is fixed for the lifetime of the value; operations that combine
/// vectors require equal lengths and report a dimension mismatch otherwise.
/// Equality (`PartialEq`) is exact, element-wise comparison with no epsilon
/// tolerance — callers that need a tolerance must compare components
/// themselves.
///
/// # Examples
///
/// ```
/// use eliminar::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector from an owned component sequence.
    #[must_use]
    pub fn from_vec(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Creates a vector by copying a slice of components.
    #[must_use]
    pub fn from_slice(components: &[f64]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }

    /// Creates a zero vector of the given length.
    ///
    /// # Errors
    ///
    /// Returns an error if `len` is zero.
    pub fn zeros(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(EliminarError::EmptyInput { what: "vector length" });
        }
        Ok(Self {
            components: vec![0.0; len],
        })
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Returns a copy of the components.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.components.clone()
    }

    /// Element-wise sum of one or more equal-length vectors.
    ///
    /// A single-term slice returns a copy of that term.
    ///
    /// # Errors
    ///
    /// Returns an error if `terms` is empty or if any term's length differs
    /// from the first term's.
    pub fn add(terms: &[Vector]) -> Result<Vector> {
        Self::fold_terms(terms, |acc, x| acc + x)
    }

    /// Element-wise left-to-right difference of one or more equal-length
    /// vectors: `terms[0] - terms[1] - ... - terms[k]`.
    ///
    /// A single-term slice returns a copy of that term.
    ///
    /// # Errors
    ///
    /// Returns an error if `terms` is empty or if any term's length differs
    /// from the first term's.
    pub fn subtract(terms: &[Vector]) -> Result<Vector> {
        Self::fold_terms(terms, |acc, x| acc - x)
    }

    fn fold_terms(terms: &[Vector], combine: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        let Some((first, rest)) = terms.split_first() else {
            return Err(EliminarError::EmptyInput { what: "terms" });
        };

        let mut result = first.components.clone();
        for term in rest {
            if term.len() != result.len() {
                return Err(EliminarError::dimension_mismatch(
                    "term length",
                    result.len(),
                    term.len(),
                ));
            }
            for (acc, &x) in result.iter_mut().zip(&term.components) {
                *acc = combine(*acc, x);
            }
        }
        Ok(Vector::from_vec(result))
    }

    /// Multiplies every component by a scalar.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Vector {
        Vector {
            components: self.components.iter().map(|c| factor * c).collect(),
        }
    }

    /// Computes `a * x + y`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` and `y` have different lengths.
    pub fn axpy(a: f64, x: &Vector, y: &Vector) -> Result<Vector> {
        Self::add(&[x.scale(a), y.clone()])
    }

    /// Computes the linear combination `sum(coefficients[i] * vectors[i])` by
    /// iterative axpy accumulation.
    ///
    /// The accumulator starts as a zero vector whose length is the number of
    /// terms, so each `vectors[i]` must have length equal to
    /// `coefficients.len()` for the accumulation to conform.
    ///
    /// # Errors
    ///
    /// Returns an error if either input is empty, if the coefficient and
    /// vector counts differ, or if any vector's length does not match the
    /// accumulator's.
    pub fn linear_combination(coefficients: &[f64], vectors: &[Vector]) -> Result<Vector> {
        if coefficients.is_empty() || vectors.is_empty() {
            return Err(EliminarError::EmptyInput { what: "terms" });
        }
        if coefficients.len() != vectors.len() {
            return Err(EliminarError::dimension_mismatch(
                "vector count",
                coefficients.len(),
                vectors.len(),
            ));
        }

        let mut result = Self::zeros(coefficients.len())?;
        for (&a, x) in coefficients.iter().zip(vectors) {
            result = Self::axpy(a, x, &result)?;
        }
        Ok(result)
    }

    /// Dot product with another vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(EliminarError::dimension_mismatch(
                "vector length",
                self.len(),
                other.len(),
            ));
        }
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(x, y)| x * y)
            .sum())
    }

    /// Euclidean length: `sqrt(dot(self, self))`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Row-vector times matrix: component `i` of the result is the dot
    /// product of `self` with column `i` of `matrix`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `self.len() == matrix.n_rows()`.
    pub fn vecmat(&self, matrix: &Matrix) -> Result<Vector> {
        if self.len() != matrix.n_rows() {
            return Err(EliminarError::dimension_mismatch(
                "matrix rows",
                self.len(),
                matrix.n_rows(),
            ));
        }

        let components = (0..matrix.n_cols())
            .map(|i| self.dot(&matrix.column(i)))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Vector::from_vec(components))
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
