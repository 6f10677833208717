//! Case configuration input
//!
//! Provides the [`ConfigStore`] lookup interface and a JSON-backed [`Dictionary`].

mod dictionary;
mod error;
mod store;

pub use dictionary::{DimensionedEntry, Dictionary, Entry, TRANSPORT_PROPERTIES};
pub use error::ConfigError;
pub use store::ConfigStore;
