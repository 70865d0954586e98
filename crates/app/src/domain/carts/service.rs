//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{Cart, CartItem, OwnerId, ProductUuid},
    repositories::{CartsRepository, CartsRepositoryError, PgCartItemsRepository},
};

#[derive(Clone)]
pub struct PgCartsService {
    repository: Arc<dyn CartsRepository>,
}

impl PgCartsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgCartItemsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn CartsRepository>) -> Self {
        Self { repository }
    }
}

fn ensure_owner(owner: &OwnerId) -> Result<(), CartsServiceError> {
    if owner.is_empty() {
        return Err(CartsServiceError::InvalidInput("owner id is empty"));
    }

    Ok(())
}

fn ensure_product(product: ProductUuid) -> Result<(), CartsServiceError> {
    if product.is_nil() {
        return Err(CartsServiceError::InvalidInput("product id is empty"));
    }

    Ok(())
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, owner: OwnerId) -> Result<Cart, CartsServiceError> {
        ensure_owner(&owner)?;

        self.repository
            .get_cart(owner)
            .await
            .map_err(CartsServiceError::repository("get cart"))
    }

    async fn add_item(&self, owner: OwnerId, item: CartItem) -> Result<(), CartsServiceError> {
        ensure_owner(&owner)?;
        ensure_product(item.product_uuid)?;

        match self.repository.add_item(owner, item).await {
            Ok(()) => Ok(()),
            Err(CartsRepositoryError::DuplicateItem) => Err(CartsServiceError::DuplicateItem),
            Err(source) => Err(CartsServiceError::repository("add item")(source)),
        }
    }

    async fn delete_item(
        &self,
        owner: OwnerId,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError> {
        ensure_owner(&owner)?;
        ensure_product(product)?;

        let deleted = self
            .repository
            .delete_item(owner, product)
            .await
            .map_err(CartsServiceError::repository("delete item"))?;

        if !deleted {
            return Err(CartsServiceError::ItemNotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the cart held by `owner`, empty when the owner has no items.
    async fn get_cart(&self, owner: OwnerId) -> Result<Cart, CartsServiceError>;

    /// Add an item to the owner's cart. Each product may appear once per cart.
    async fn add_item(&self, owner: OwnerId, item: CartItem) -> Result<(), CartsServiceError>;

    /// Remove a product from the owner's cart.
    async fn delete_item(
        &self,
        owner: OwnerId,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError>;
}
