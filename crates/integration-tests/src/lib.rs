//! Integration tests for Palanca.
//!
//! The tests in `tests/` mount the full storefront router — state,
//! middleware, routes — in process and drive it with
//! `tower::ServiceExt::oneshot`. No listener is bound and nothing external
//! is involved, so the suite runs anywhere `cargo test` does.
//!
//! Each `oneshot` consumes a router, so tests clone the app per request;
//! clones share the same underlying store.

// Test support: panicking on a malformed request or body is the right
// failure mode here.
#![allow(clippy::expect_used, clippy::missing_panics_doc)]
#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use palanca_storefront::config::StorefrontConfig;
use palanca_storefront::state::AppState;

/// Build a storefront app with the seeded demo catalog and test config.
#[must_use]
pub fn test_app() -> Router {
    let config = StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        // Test binaries run with the package directory as cwd.
        static_dir: PathBuf::from("../storefront/static"),
    };

    palanca_storefront::app(AppState::new(config))
}

/// Build a GET request.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Build a POST request with an urlencoded form body.
#[must_use]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

/// Collect a response body into a UTF-8 string.
///
/// # Panics
///
/// Panics if the body cannot be collected or is not valid UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("collect body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
