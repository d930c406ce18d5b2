use thiserror::Error;

pub type PanelResult<T> = Result<T, PanelError>;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("field `{field}` has {actual} values, frame length is {expected}")]
    FieldLengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
}
