//! Cart Payloads

use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trolley_app::domain::{
    carts::models::{Cart, CartItem},
    money::{Money, MoneyError},
};

use crate::money::MoneyPayload;

/// Cart Payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartPayload {
    /// The owner of the cart
    pub owner_id: String,

    /// The items in the cart, empty when the owner has none
    pub items: Vec<CartItemPayload>,
}

impl From<Cart> for CartPayload {
    fn from(cart: Cart) -> Self {
        Self {
            owner_id: cart.owner.to_string(),
            items: cart.items.into_iter().map(CartItemPayload::from).collect(),
        }
    }
}

/// Cart Item Payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemPayload {
    /// The product held in the cart
    pub product_id: Uuid,

    /// The price of the product
    pub price: MoneyPayload,

    /// When the item was added, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[salvo(schema(value_type = Option<String>))]
    pub created_at: Option<Timestamp>,
}

impl From<CartItem> for CartItemPayload {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_uuid.into_uuid(),
            price: item.price.into(),
            created_at: item.created_at,
        }
    }
}

impl TryFrom<CartItemPayload> for CartItem {
    type Error = MoneyError;

    fn try_from(payload: CartItemPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            product_uuid: payload.product_id.into(),
            price: Money::try_from(payload.price)?,
            created_at: payload.created_at,
        })
    }
}
