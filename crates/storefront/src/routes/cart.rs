//! Cart route handlers.
//!
//! Cart mutations use HTMX for dynamic updates without full page reloads.
//! Every mutation response carries an `HX-Trigger: cart-updated` header so
//! the navigation badge (and anything else listening) refetches its state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse},
};
use palanca_core::{CartItem, ProductId, Store};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            line_total: item.line_total().to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub count: u32,
}

impl From<&Store> for CartView {
    fn from(store: &Store) -> Self {
        Self {
            items: store.cart_items().iter().map(CartItemView::from).collect(),
            total: store.cart_total().to_string(),
            count: store.cart_count(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: u32,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store();
    let cart = CartView::from(&*store);

    CartShowTemplate {
        cart_count: cart.count,
        cart,
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// The posted id must name a catalog product; anything else is a 404. This
/// is the boundary that keeps cart lines referencing real products only.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store_mut();

    let Some(product) = store.product(ProductId::new(form.product_id)).cloned() else {
        return Err(AppError::NotFound(format!("product {}", form.product_id)));
    };
    store.add_to_cart(&product);
    let count = store.cart_count();
    drop(store);

    tracing::info!(product_id = form.product_id, count, "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    ))
}

/// Remove one unit of a product from the cart (HTMX).
///
/// Ids without a matching cart line fall through as a no-op; the response
/// still renders the current cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let mut store = state.store_mut();
    store.remove_from_cart(ProductId::new(form.product_id));
    let cart = CartView::from(&*store);
    drop(store);

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.store().cart_count();

    CartCountTemplate { count }
}
