//! Application router assembly.
//!
//! [`build_app_router`] is the single place routes and middleware come
//! together; `main.rs` and the integration tests both go through it.

use std::time::Duration;

use anyhow::Context;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the application [`Router`]: `/health` at the root, list endpoints
/// under `/api/v1`, wrapped in the shared middleware stack.
///
/// Fails if any route's list constraints are rejected at registration or a
/// configured CORS origin is not a valid header value.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let api = routes::api_routes().context("list constraints rejected at registration")?;

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", api);

    Ok(with_middleware(app, config)?.with_state(state))
}

/// Wrap `app` in the middleware stack. Layers listed later run first on the
/// way in:
///
/// CORS → set request ID → trace → propagate request ID → timeout → catch panic
fn with_middleware(
    app: Router<AppState>,
    config: &ServerConfig,
) -> anyhow::Result<Router<AppState>> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    Ok(app
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config)?))
}

/// CORS for the read-only list API: configured origins, `GET` only.
pub fn build_cors_layer(config: &ServerConfig) -> anyhow::Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors_origins)?)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(Duration::from_secs(3600)))
}

fn allowed_origins(origins: &[String]) -> anyhow::Result<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin {origin:?}"))
        })
        .collect()
}
