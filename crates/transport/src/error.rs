use multiphase_fields::FieldError;
use multiphase_io::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("dispersed phase index {index} out of range: {count} dispersed phases")]
    PhaseIndexOutOfRange { index: usize, count: usize },
}
