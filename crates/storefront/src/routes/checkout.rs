//! Checkout route handlers.
//!
//! The payment form performs presence checks only: no card format, checksum,
//! or expiry validation. A valid submission snapshots the cart into an order,
//! clears the cart, and redirects to the catalog with the success flag.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use palanca_core::Order;
use palanca_core::domain::order::format_order_date;
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Payment form data.
///
/// Deliberately not `Debug`: card fields must never reach the logs.
#[derive(Deserialize)]
pub struct CheckoutForm {
    pub card_name: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// Presence check over all four fields, on the raw strings.
    fn is_filled(&self) -> bool {
        !self.card_name.is_empty()
            && !self.card_number.is_empty()
            && !self.expiration_date.is_empty()
            && !self.cvv.is_empty()
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub total: String,
    pub error: Option<String>,
    pub card_name: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub cart_count: u32,
}

/// Display the payment form.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store();

    CheckoutTemplate {
        total: store.cart_total().to_string(),
        error: None,
        card_name: String::new(),
        card_number: String::new(),
        expiration_date: String::new(),
        cvv: String::new(),
        cart_count: store.cart_count(),
    }
}

/// Place the order.
///
/// An empty cart still checks out into an empty order with a zero total;
/// nothing enforces non-emptiness.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<CheckoutForm>) -> Response {
    if !form.is_filled() {
        let store = state.store();
        return CheckoutTemplate {
            total: store.cart_total().to_string(),
            error: Some("Por favor, completa todos los campos correctamente.".to_owned()),
            card_name: form.card_name,
            card_number: form.card_number,
            expiration_date: form.expiration_date,
            cvv: form.cvv,
            cart_count: store.cart_count(),
        }
        .into_response();
    }

    let mut store = state.store_mut();
    let order = Order::new(
        store.cart_items().to_vec(),
        store.cart_total(),
        format_order_date(chrono::Local::now().date_naive()),
    );
    let total = order.total;
    store.add_order(order);
    store.clear_cart();
    drop(store);

    tracing::info!(total = %total, "Order placed");

    Redirect::to("/?pedido=ok").into_response()
}
