//! Test Helpers

use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    carts::models::{CartItem, ProductUuid},
    money::Money,
};

/// An unpersisted cart item for a fresh product.
pub(crate) fn cart_item(amount: &str, currency: &str) -> CartItem {
    let amount = Decimal::from_str(amount).expect("test amount should be a decimal");

    CartItem {
        product_uuid: ProductUuid::new(),
        price: Money::new(amount, currency).expect("test currency should be valid"),
        created_at: None,
    }
}

/// Compare item sets ignoring order and store-assigned timestamps.
pub(crate) fn assert_same_items(expected: &[CartItem], actual: &[CartItem]) {
    fn normalise(items: &[CartItem]) -> Vec<(Uuid, Money)> {
        let mut items: Vec<_> = items
            .iter()
            .map(|item| (item.product_uuid.into_uuid(), item.price))
            .collect();

        items.sort_by_key(|(uuid, _)| *uuid);

        items
    }

    assert_eq!(normalise(expected), normalise(actual));
}
