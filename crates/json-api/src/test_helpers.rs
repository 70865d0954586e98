//! Test helpers.

use std::{str::FromStr, sync::Arc};

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use testresult::TestResult;

use trolley_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{CartItem, ProductUuid},
        },
        money::Money,
    },
};

use crate::state::State;

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(carts)))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

pub(crate) fn make_item(
    product: ProductUuid,
    amount: &str,
    currency: &str,
) -> TestResult<CartItem> {
    Ok(CartItem {
        product_uuid: product,
        price: Money::new(Decimal::from_str(amount)?, currency)?,
        created_at: Some(jiff::Timestamp::UNIX_EPOCH),
    })
}
