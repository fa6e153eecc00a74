use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Cart not found")]
    NotFound,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
