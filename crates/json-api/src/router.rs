//! App Router

use salvo::Router;

use crate::{carts, healthcheck, observability};

/// Routes served by the API, without process-level hoops or API docs.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("carts/{owner_id}")
                .get(carts::get::handler)
                .post(carts::items::create::handler)
                .push(Router::with_path("{product_id}").delete(carts::items::delete::handler)),
        )
}
