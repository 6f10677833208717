//! Physical properties of a continuous phase and N dispersed phases
//!
//! Reads densities, viscosities, interfacial tensions and interphase force
//! coefficients from a case dictionary and exposes them as constants and as
//! uniform cell fields over the mesh.

mod error;
mod phase;
mod transport;

pub use error::TransportError;
pub use phase::{DispersedPhase, PhaseProperties};
pub use transport::MultiphaseTransport;
