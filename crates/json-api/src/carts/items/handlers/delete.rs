//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use trolley_app::domain::carts::models::OwnerId;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Delete Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Delete Cart Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
#[tracing::instrument(
    name = "carts.items.delete",
    skip(owner_id, product_id, depot),
    fields(
        owner_id = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    owner_id: PathParam<String>,
    product_id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = OwnerId::new(owner_id.into_inner());
    let product = product_id.into_inner();

    let span = tracing::Span::current();

    span.record("owner_id", tracing::field::display(&owner));
    span.record("product_id", tracing::field::display(product));

    state
        .app
        .carts
        .delete_item(owner, product.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = %product, "deleted cart item");

    Ok(StatusCode::NO_CONTENT)
}
