use thiserror::Error;

/// Errors raised while building or parsing catalog domain values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid {field}: {value:?} (expected one of {expected})")]
    InvalidTag { field: &'static str, value: String, expected: &'static str },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
