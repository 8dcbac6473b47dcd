//! Profile route handlers.
//!
//! Name/email edits and preference changes all funnel through `update_user`
//! patches; the order history section is read-only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use palanca_core::{Order, User, UserPatch};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// User display data for templates.
#[derive(Clone)]
pub struct UserView {
    pub name: String,
    pub email: String,
    pub preferences: Vec<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            preferences: user.preferences.clone(),
        }
    }
}

/// Order line display data for templates.
#[derive(Clone)]
pub struct OrderItemView {
    pub name: String,
    pub quantity: u32,
}

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub date: String,
    pub total: String,
    pub items: Vec<OrderItemView>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            date: order.date.clone(),
            total: order.total.to_string(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    name: item.name.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Profile update form data.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

/// Preference add form data.
#[derive(Debug, Deserialize)]
pub struct AddPreferenceForm {
    pub preference: String,
}

/// Preference remove form data.
#[derive(Debug, Deserialize)]
pub struct RemovePreferenceForm {
    pub index: usize,
}

/// Query flags for the profile page.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Set to `ok` by the update redirect to show the saved notice.
    pub actualizado: Option<String>,
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/show.html")]
pub struct ProfileTemplate {
    pub user: UserView,
    pub orders: Vec<OrderView>,
    pub updated: bool,
    pub cart_count: u32,
}

/// Display the profile page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> impl IntoResponse {
    let store = state.store();

    ProfileTemplate {
        user: UserView::from(store.user_data()),
        orders: store.order_history().iter().map(OrderView::from).collect(),
        updated: query.actualizado.as_deref() == Some("ok"),
        cart_count: store.cart_count(),
    }
}

/// Update name and email.
///
/// Preferences are left untouched by this patch.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn update(State(state): State<AppState>, Form(form): Form<ProfileForm>) -> Redirect {
    state.store_mut().update_user(UserPatch {
        name: Some(form.name),
        email: Some(form.email),
        ..UserPatch::default()
    });

    Redirect::to("/profile?actualizado=ok")
}

/// Add a preference.
///
/// The input is trimmed; an empty result changes nothing.
#[instrument(skip(state))]
pub async fn add_preference(
    State(state): State<AppState>,
    Form(form): Form<AddPreferenceForm>,
) -> Redirect {
    let preference = form.preference.trim();
    if !preference.is_empty() {
        let mut store = state.store_mut();
        let mut preferences = store.user_data().preferences.clone();
        preferences.push(preference.to_owned());
        store.update_user(UserPatch {
            preferences: Some(preferences),
            ..UserPatch::default()
        });
    }

    Redirect::to("/profile")
}

/// Remove the preference at the given position.
///
/// Out-of-range positions change nothing.
#[instrument(skip(state))]
pub async fn remove_preference(
    State(state): State<AppState>,
    Form(form): Form<RemovePreferenceForm>,
) -> Redirect {
    let mut store = state.store_mut();
    let mut preferences = store.user_data().preferences.clone();
    if form.index < preferences.len() {
        preferences.remove(form.index);
        store.update_user(UserPatch {
            preferences: Some(preferences),
            ..UserPatch::default()
        });
    }

    Redirect::to("/profile")
}
