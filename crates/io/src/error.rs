use std::path::PathBuf;

use multiphase_types::Dimension;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required section `{name}` in dictionary `{dict}`")]
    MissingSection { dict: String, name: String },
    #[error("missing key `{key}` in dictionary `{dict}`")]
    MissingKey { dict: String, key: String },
    #[error("type mismatch for `{dict}.{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        dict: String,
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid label for `{dict}.{key}`: {value} is negative or out of range")]
    InvalidLabel {
        dict: String,
        key: String,
        value: String,
    },
    #[error("dimension mismatch for `{dict}.{key}`: expected {expected}, found {found}")]
    DimensionMismatch {
        dict: String,
        key: String,
        expected: Dimension,
        found: Dimension,
    },
    #[error("invalid dimensions for `{dict}.{key}`: expected 5 or 7 exponents, found {len}")]
    InvalidDimensions { dict: String, key: String, len: usize },
    #[error("failed to parse dictionary `{name}`: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
