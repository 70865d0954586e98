//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_template(path);
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

/// Label for paths the router does not serve.
const UNMATCHED_ROUTE: &str = "/{unmatched}";

/// Map a request path onto one of the routes the server knows, collapsing caller-chosen
/// segments. Anything else shares a single label so spans and metric series stay bounded.
fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["health"] => "/health",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        ["carts", _] => "/carts/{owner_id}",
        ["carts", _, _] => "/carts/{owner_id}/{product_id}",
        _ => UNMATCHED_ROUTE,
    }
    .to_owned()
}
