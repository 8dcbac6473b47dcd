//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                           - Catalog page
//! GET  /health                     - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart                       - Cart page
//! POST /cart/add                   - Add one unit (returns count badge, triggers cart-updated)
//! POST /cart/remove                - Remove one unit (returns cart_items fragment)
//! GET  /cart/count                 - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout                   - Payment form
//! POST /checkout                   - Place order, redirect to /?pedido=ok
//!
//! # Profile
//! GET  /profile                    - Profile page with order history
//! POST /profile                    - Update name/email
//! POST /profile/preferences/add    - Add a preference
//! POST /profile/preferences/remove - Remove a preference by position
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod profile;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::show).post(profile::update))
        .route("/preferences/add", post(profile::add_preference))
        .route("/preferences/remove", post(profile::remove_preference))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
        // Profile routes
        .nest("/profile", profile_routes())
}
