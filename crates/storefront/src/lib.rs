//! Palanca storefront library.
//!
//! The storefront is an axum application: catalog, cart, checkout, and user
//! profile rendered server-side with Askama, with HTMX keeping the cart
//! fragments live. All state lives in the in-memory [`palanca_core::Store`];
//! there is no database and no persistence across restarts.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, extract::Request, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full application router for the given state.
///
/// Both the binary and the integration tests go through this, so tests
/// exercise the same middleware stack the server runs.
#[must_use]
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
