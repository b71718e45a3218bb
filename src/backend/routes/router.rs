/**
 * Router Configuration
 *
 * Assembles the account and post routes into one router and wraps it in the
 * HTTP middleware stack, outermost first:
 *
 * 1. **Trace**: one `http_request` span per request
 * 2. **CORS**: configured origins, with credentials so the browser sends
 *    the `token` cookie cross-origin
 *
 * Unknown routes get the standard JSON error envelope with a 404.
 */

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, Request},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_post_routes};
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = configure_auth_routes(Router::new());
    let router = configure_post_routes(router, config.max_upload_bytes);

    router
        .fallback(|| async { BackendError::not_found("Route not found") })
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        tracing::span!(
                            Level::INFO,
                            "http_request",
                            method = %request.method(),
                            path = %request.uri().path(),
                        )
                    }),
                )
                .layer(cors_layer(&config.cors_origins)),
        )
        .with_state(app_state)
}

/// CORS policy for the configured browser origins
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
