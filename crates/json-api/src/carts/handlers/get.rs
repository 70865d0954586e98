//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use trolley_app::domain::carts::models::OwnerId;

use crate::{
    carts::{errors::into_status_error, models::CartPayload},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns every item held by the owner. An owner without items gets an empty cart.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.get",
    skip(owner_id, depot),
    fields(owner_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    owner_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartPayload>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = OwnerId::new(owner_id.into_inner());

    tracing::Span::current().record("owner_id", tracing::field::display(&owner));

    let cart = state
        .app
        .carts
        .get_cart(owner)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
