//! Cart Repositories

use async_trait::async_trait;
use mockall::automock;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::carts::models::{Cart, CartItem, OwnerId, ProductUuid};

mod items;

pub(crate) use items::PgCartItemsRepository;

#[derive(Debug, Error)]
pub enum CartsRepositoryError {
    #[error("cart item already exists for this owner and product")]
    DuplicateItem,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsRepositoryError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::DuplicateItem,
            _ => Self::Sql(error),
        }
    }
}

/// Persistence for the items making up each owner's cart.
#[automock]
#[async_trait]
pub(crate) trait CartsRepository: Send + Sync {
    /// Fetch every item held by `owner`. Owners without items get an empty cart.
    async fn get_cart(&self, owner: OwnerId) -> Result<Cart, CartsRepositoryError>;

    /// Insert a single item; the store assigns `created_at`.
    async fn add_item(&self, owner: OwnerId, item: CartItem) -> Result<(), CartsRepositoryError>;

    /// Delete one item, returning whether a row matched.
    async fn delete_item(
        &self,
        owner: OwnerId,
        product: ProductUuid,
    ) -> Result<bool, CartsRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_a_storage_error() {
        let error = CartsRepositoryError::from(Error::RowNotFound);

        assert!(
            matches!(error, CartsRepositoryError::Sql(Error::RowNotFound)),
            "expected Sql(RowNotFound), got {error:?}"
        );
    }

    #[test]
    fn pool_timeout_is_a_storage_error() {
        let error = CartsRepositoryError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, CartsRepositoryError::Sql(Error::PoolTimedOut)),
            "expected Sql(PoolTimedOut), got {error:?}"
        );
    }
}
