//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use eliminar::prelude::*;
//! ```

pub use crate::error::EliminarError;
pub use crate::primitives::{Matrix, Vector};
pub use crate::solve::LinearSystem;
