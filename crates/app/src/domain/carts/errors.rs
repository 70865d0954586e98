//! Carts service errors.

use thiserror::Error;

use crate::domain::carts::repositories::CartsRepositoryError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("item already exists in the cart")]
    DuplicateItem,

    #[error("cart item not found")]
    ItemNotFound,

    #[error("{operation} failed")]
    Repository {
        operation: &'static str,

        #[source]
        source: CartsRepositoryError,
    },
}

impl CartsServiceError {
    pub(crate) fn repository(operation: &'static str) -> impl FnOnce(CartsRepositoryError) -> Self {
        move |source| Self::Repository { operation, source }
    }
}
