//! Core dense primitives (Vector, Matrix).
//!
//! These types carry the arithmetic the elimination transforms are built on.
//! Matrices are column-major throughout the crate.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_vector_contract;
