//! Business operations behind the HTTP handlers.

use thiserror::Error;

pub mod company;

#[derive(Debug, Error)]
/// Errors surfaced by service operations.
pub enum ServiceError {
    /// Input was rejected; the message is safe to show to the caller.
    #[error("{0}")]
    Validation(String),

    /// The company store could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other store failure.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
