//! Fundamental type system for multiphase transport properties
//!
//! Provides physical dimensions, dimensioned constants, and field value traits.

pub mod dimension;
pub mod dimensioned;
pub mod quantity;
pub mod traits;

pub use dimension::Dimension;
pub use dimensioned::DimensionedScalar;
pub use quantity::Quantity;
pub use traits::FieldValue;
