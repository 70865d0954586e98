//! Create Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use trolley_app::domain::carts::models::{CartItem, OwnerId};

use crate::{
    carts::{
        errors::{into_status_error, invalid_payload},
        models::CartItemPayload,
    },
    extensions::*,
    state::State,
};

/// Create Cart Item Handler
///
/// Adds a product to the owner's cart. The creation time is always assigned by the server.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item created"),
        (status_code = StatusCode::CONFLICT, description = "Item already exists in the cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(owner_id, json, req, depot, res),
    fields(
        owner_id = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    owner_id: PathParam<String>,
    json: JsonBody<CartItemPayload>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = OwnerId::new(owner_id.into_inner());
    let item = CartItem::try_from(json.into_inner()).map_err(|error| invalid_payload(&error))?;
    let product = item.product_uuid;

    let span = tracing::Span::current();

    span.record("owner_id", tracing::field::display(&owner));
    span.record("product_id", tracing::field::display(product));

    state
        .app
        .carts
        .add_item(owner, item)
        .await
        .map_err(into_status_error)?;

    let location = format!("{}/{product}", req.uri().path().trim_end_matches('/'));

    res.add_header(LOCATION, location, true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product, "added cart item");

    Ok(())
}
