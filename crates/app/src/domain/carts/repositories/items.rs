//! Cart Items Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Error, FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::models::{Cart, CartItem, OwnerId, ProductUuid},
    money::Money,
};

use super::{CartsRepository, CartsRepositoryError};

const GET_CART_ITEMS_SQL: &str = include_str!("sql/get_cart_items.sql");
const CREATE_CART_ITEM_SQL: &str = include_str!("sql/create_cart_item.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("sql/delete_cart_item.sql");

/// PostgreSQL-backed cart items repository.
#[derive(Debug, Clone)]
pub(crate) struct PgCartItemsRepository {
    pool: PgPool,
}

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartsRepository for PgCartItemsRepository {
    async fn get_cart(&self, owner: OwnerId) -> Result<Cart, CartsRepositoryError> {
        let items = query_as::<Postgres, CartItem>(GET_CART_ITEMS_SQL)
            .bind(owner.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(CartsRepositoryError::Sql)?;

        Ok(Cart { owner, items })
    }

    async fn add_item(&self, owner: OwnerId, item: CartItem) -> Result<(), CartsRepositoryError> {
        query(CREATE_CART_ITEM_SQL)
            .bind(owner.as_str())
            .bind(item.product_uuid.into_uuid())
            .bind(item.price.amount)
            .bind(item.price.currency.code())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_item(
        &self,
        owner: OwnerId,
        product: ProductUuid,
    ) -> Result<bool, CartsRepositoryError> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(owner.as_str())
            .bind(product.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(CartsRepositoryError::Sql)?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let currency: String = row.try_get("price_currency")?;

        let price =
            Money::new(row.try_get("price_amount")?, &currency).map_err(|e| Error::ColumnDecode {
                index: "price_currency".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_id")?),
            price,
            created_at: Some(row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff()),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::test::{
        TestDb,
        helpers::{assert_same_items, cart_item},
    };

    use super::*;

    fn repository(db: &TestDb) -> PgCartItemsRepository {
        PgCartItemsRepository::new(db.pool().clone())
    }

    fn owner() -> OwnerId {
        OwnerId::new(Uuid::now_v7().to_string())
    }

    #[tokio::test]
    async fn get_cart_without_items_returns_empty_cart() -> TestResult {
        let db = TestDb::new().await;
        let owner = owner();

        let cart = repository(&db).get_cart(owner.clone()).await?;

        assert_eq!(cart.owner, owner);
        assert!(cart.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn added_items_are_returned_by_get_cart() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let owner = owner();

        let items = vec![
            cart_item("9.99", "USD"),
            cart_item("0.10", "EUR"),
            cart_item("1500", "JPY"),
        ];

        for item in &items {
            repo.add_item(owner.clone(), item.clone()).await?;
        }

        let cart = repo.get_cart(owner.clone()).await?;

        assert_eq!(cart.owner, owner);
        assert_same_items(&items, &cart.items);

        Ok(())
    }

    #[tokio::test]
    async fn amounts_round_trip_exactly() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let owner = owner();

        let item = cart_item("12345678901234.123456789", "GBP");

        repo.add_item(owner.clone(), item.clone()).await?;

        let cart = repo.get_cart(owner).await?;
        let stored = cart.items.first().map(|stored| stored.price.amount.to_string());

        assert_eq!(stored.as_deref(), Some("12345678901234.123456789"));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_item_is_rejected_and_not_stored_twice() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let owner = owner();
        let item = cart_item("9.99", "USD");

        repo.add_item(owner.clone(), item.clone()).await?;

        let result = repo.add_item(owner.clone(), item.clone()).await;

        assert!(
            matches!(result, Err(CartsRepositoryError::DuplicateItem)),
            "expected DuplicateItem, got {result:?}"
        );

        let cart = repo.get_cart(owner).await?;

        assert_same_items(&[item], &cart.items);

        Ok(())
    }

    #[tokio::test]
    async fn same_product_may_be_held_by_different_owners() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let item = cart_item("3.50", "USD");
        let (owner_a, owner_b) = (owner(), owner());

        repo.add_item(owner_a.clone(), item.clone()).await?;
        repo.add_item(owner_b.clone(), item.clone()).await?;

        assert_same_items(&[item.clone()], &repo.get_cart(owner_a).await?.items);
        assert_same_items(&[item], &repo.get_cart(owner_b).await?.items);

        Ok(())
    }

    #[tokio::test]
    async fn store_assigns_created_at() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let owner = owner();

        let mut item = cart_item("1.00", "USD");
        item.created_at = Some(Timestamp::UNIX_EPOCH);

        repo.add_item(owner.clone(), item).await?;

        let cart = repo.get_cart(owner).await?;
        let created_at = cart.items.first().and_then(|stored| stored.created_at);

        assert!(
            created_at.is_some_and(|at| at > Timestamp::UNIX_EPOCH),
            "expected store-assigned timestamp, got {created_at:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_present_item_removes_only_that_item() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let owner = owner();
        let (keep, remove) = (cart_item("1.00", "USD"), cart_item("2.00", "USD"));

        repo.add_item(owner.clone(), keep.clone()).await?;
        repo.add_item(owner.clone(), remove.clone()).await?;

        let deleted = repo
            .delete_item(owner.clone(), remove.product_uuid)
            .await?;

        assert!(deleted);
        assert_same_items(&[keep], &repo.get_cart(owner).await?.items);

        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_item_reports_nothing_deleted() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let owner = owner();
        let item = cart_item("1.00", "USD");

        repo.add_item(owner.clone(), item.clone()).await?;

        let deleted = repo.delete_item(owner.clone(), ProductUuid::new()).await?;

        assert!(!deleted);
        assert_same_items(&[item], &repo.get_cart(owner).await?.items);

        Ok(())
    }

    #[tokio::test]
    async fn delete_does_not_touch_other_owners() -> TestResult {
        let db = TestDb::new().await;
        let repo = repository(&db);
        let item = cart_item("1.00", "USD");
        let (owner_a, owner_b) = (owner(), owner());

        repo.add_item(owner_a.clone(), item.clone()).await?;

        let deleted = repo.delete_item(owner_b, item.product_uuid).await?;

        assert!(!deleted);
        assert_same_items(&[item], &repo.get_cart(owner_a).await?.items);

        Ok(())
    }

    #[tokio::test]
    async fn undecodable_stored_currency_is_a_storage_error() -> TestResult {
        let db = TestDb::new().await;
        let owner = owner();

        query(
            "INSERT INTO cart_items (owner_id, product_id, price_amount, price_currency) \
             VALUES ($1, $2, 1.00, 'ZZZ')",
        )
        .bind(owner.as_str())
        .bind(Uuid::now_v7())
        .execute(db.pool())
        .await?;

        let result = repository(&db).get_cart(owner).await;

        assert!(
            matches!(
                result,
                Err(CartsRepositoryError::Sql(Error::ColumnDecode { .. }))
            ),
            "expected ColumnDecode storage error, got {result:?}"
        );

        Ok(())
    }
}
