//! Cell-centred fields over a mesh
//!
//! Provides uniform field construction and element-wise field arithmetic.

mod error;
mod vol_field;

pub use error::FieldError;
pub use vol_field::{VolField, VolScalarField};
