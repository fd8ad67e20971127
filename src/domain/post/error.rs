#[derive(Debug, thiserror::Error)]
pub enum PostValidationError {
    #[error("invalid input: {0}")]
    Invalid(String),
}
