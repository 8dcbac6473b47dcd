//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (per-request span with an empty `request_id` field)
//! 2. Request ID (fill the span field, echo the ID in response headers)

pub mod request_id;

pub use request_id::request_id_middleware;
