//! Computational mesh as seen by property fields
//!
//! Provides the cell domain fields are instantiated over.

mod mesh;

pub use mesh::Mesh;
