use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("No rows were persisted")]
    NothingPersisted,
    #[error("Internal error: {0}")]
    Internal(String),
}
