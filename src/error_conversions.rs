//! Error conversion glue between the layers.
//!
//! The form and repository layers must not depend on service error types, so
//! the mappings into [`ServiceError`] live here.

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::ValidationError(message) => ServiceError::Validation(message),
            RepositoryError::ConnectionError(message) => ServiceError::Connection(message),
            RepositoryError::DatabaseError(message) | RepositoryError::Unexpected(message) => {
                ServiceError::Internal(message)
            }
        }
    }
}
