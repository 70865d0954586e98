//! Errors

use std::error::Error as _;

use salvo::http::StatusError;
use tracing::{error, warn};

use trolley_app::domain::{carts::CartsServiceError, money::MoneyError};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::InvalidInput(reason) => StatusError::bad_request().brief(reason),
        CartsServiceError::DuplicateItem => {
            StatusError::conflict().brief("Item already exists in the cart")
        }
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Cart item not found"),
        error @ CartsServiceError::Repository { .. } => {
            match error.source() {
                Some(source) => error!("{error}: {source}"),
                None => error!("{error}"),
            }

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn invalid_payload(error: &MoneyError) -> StatusError {
    warn!("rejected cart item payload: {error}");

    StatusError::bad_request().brief("Invalid cart item payload")
}
