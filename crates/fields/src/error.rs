#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("field size mismatch: `{lhs}` has {lhs_len} cells, `{rhs}` has {rhs_len}")]
    SizeMismatch {
        lhs: String,
        lhs_len: usize,
        rhs: String,
        rhs_len: usize,
    },
}
