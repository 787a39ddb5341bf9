//! Router middleware.

use axum::http::{HeaderValue, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// CORS layer admitting only `origin`, with any method and header.
///
/// Requests from any other origin get no `Access-Control-Allow-Origin`.
///
/// `Location` is exposed so the frontend can follow newly created orders.
#[must_use]
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::LOCATION])
}
