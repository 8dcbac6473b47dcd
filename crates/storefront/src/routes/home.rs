//! Catalog page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use palanca_core::Product;
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}

/// Query flags for the catalog page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Set to `ok` by the checkout redirect to show the success notice.
    pub pedido: Option<String>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    pub order_placed: bool,
    pub cart_count: u32,
}

/// Display the catalog.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let store = state.store();

    HomeTemplate {
        products: store.products_list().iter().map(ProductView::from).collect(),
        order_placed: query.pedido.as_deref() == Some("ok"),
        cart_count: store.cart_count(),
    }
}
