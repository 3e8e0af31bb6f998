//! Eliminar: dense numerical linear algebra with Gauss-Jordan elimination.
//!
//! Eliminar provides three value types — [`Vector`], [`Matrix`], and
//! [`LinearSystem`] — and solves square linear systems by Gauss-Jordan
//! elimination with partial pivoting. Matrices are column-major: a matrix is
//! an ordered sequence of equal-length column vectors, so column access is
//! cheap and row access is a scan across columns.
//!
//! # Quick Start
//!
//! ```
//! use eliminar::prelude::*;
//!
//! // Columns of the coefficient matrix: rows read [0 1; 1 1].
//! let lhs = Matrix::from_columns(vec![vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
//! let rhs = Vector::from_slice(&[1.0, 3.0]);
//!
//! // The first pivot is zero, so elimination swaps rows before reducing.
//! let system = LinearSystem::from_vector(lhs, &rhs).unwrap();
//! let solved = system.gauss_jordan().unwrap();
//!
//! let x = solved.rhs().column(0);
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! assert!((x[1] - 1.0).abs() < 1e-12);
//! // The pivot record shows the row swap at step 0.
//! assert_eq!(solved.pivot().as_slice(), &[1.0, 0.0]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`solve`]: LinearSystem and the elimination transforms
//! - [`error`]: Crate-wide error type
//!
//! # Failure model
//!
//! Construction-time validation (non-square left-hand side, dimension
//! mismatches) and algorithmic failure (a genuinely singular pivot column)
//! both surface as [`EliminarError`] values; no operation panics on bad input
//! and no operation returns a partial result.
//!
//! [`Vector`]: primitives::Vector
//! [`Matrix`]: primitives::Matrix
//! [`LinearSystem`]: solve::LinearSystem
//! [`EliminarError`]: error::EliminarError

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod solve;

pub use error::EliminarError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EliminarError>;
